use anyhow::{Result, bail};

use donut_core::preferences::{DisplayPreferences, FontSize, PreferencesRepository};

use super::Context;

pub fn show(ctx: &Context) -> Result<()> {
    let preferences = ctx.preferences_repository()?.load()?;
    print!("{}", render(&preferences));
    Ok(())
}

pub fn font_size(ctx: &Context, size: &str) -> Result<()> {
    let size: FontSize = size.parse()?;
    let repository = ctx.preferences_repository()?;
    let mut preferences = repository.load()?;
    preferences.font_size = size;
    repository.save(&preferences)?;
    tracing::info!("[Preferences] Font size set to {}", size);
    print!("{}", render(&preferences));
    Ok(())
}

pub fn move_column(ctx: &Context, from: usize, to: usize) -> Result<()> {
    let repository = ctx.preferences_repository()?;
    let mut preferences = repository.load()?;
    let columns = preferences.column_order.len();
    if from >= columns || to >= columns {
        bail!("Column index out of range (0..{})", columns);
    }
    if preferences.move_column(from, to) {
        repository.save(&preferences)?;
    }
    print!("{}", render(&preferences));
    Ok(())
}

fn render(preferences: &DisplayPreferences) -> String {
    let mut out = format!(
        "font size: {} ({}pt)\ncolumns:\n",
        preferences.font_size,
        preferences.font_size.points()
    );
    for (index, column) in preferences.column_order.iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", index, column));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use donut_core::config::DonutConfig;
    use tempfile::TempDir;

    fn context(temp_dir: &TempDir) -> Context {
        Context::new(
            DonutConfig::default(),
            None,
            Some(temp_dir.path().to_path_buf()),
        )
    }

    #[test]
    fn test_font_size_persists() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);

        font_size(&ctx, "large").unwrap();
        let loaded = ctx.preferences_repository().unwrap().load().unwrap();
        assert_eq!(loaded.font_size, FontSize::Large);
    }

    #[test]
    fn test_unknown_font_size_rejected() {
        let temp_dir = TempDir::new().unwrap();
        assert!(font_size(&context(&temp_dir), "huge").is_err());
    }

    #[test]
    fn test_move_column() {
        let temp_dir = TempDir::new().unwrap();
        let ctx = context(&temp_dir);

        move_column(&ctx, 5, 0).unwrap();
        let loaded = ctx.preferences_repository().unwrap().load().unwrap();
        assert_eq!(loaded.column_order[0], "notes");

        assert!(move_column(&ctx, 0, 6).is_err());
    }

    #[test]
    fn test_render() {
        let rendered = render(&DisplayPreferences::default());
        assert!(rendered.starts_with("font size: medium (14pt)\n"));
        assert!(rendered.contains("  0. deliveryDate\n"));
    }
}

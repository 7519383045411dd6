use std::io::{BufRead, Write as _};

use anyhow::Result;

use donut_application::{CategoryOrderManager, OrderAction, apply_saved_order};
use donut_core::catalog::CatalogCategory;
use donut_core::ordering::MoveDirection;

use super::Context;

pub fn show(ctx: &Context) -> Result<()> {
    print_saved_order(ctx, &ctx.load_catalog()?)
}

pub fn move_category(ctx: &Context, category_id: String, direction: MoveDirection) -> Result<()> {
    run_action(
        ctx,
        OrderAction::MoveCategory {
            category_id,
            direction,
        },
    )
}

pub fn move_product(
    ctx: &Context,
    category_id: String,
    product_id: String,
    direction: MoveDirection,
) -> Result<()> {
    run_action(
        ctx,
        OrderAction::MoveProduct {
            category_id,
            product_id,
            direction,
        },
    )
}

pub fn drag(ctx: &Context, dragged_id: String, target_id: String) -> Result<()> {
    run_action(
        ctx,
        OrderAction::DragCategory {
            dragged_id,
            target_id,
        },
    )
}

pub fn reset(ctx: &Context, yes: bool) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let repository = ctx.order_repository()?;
    let mut manager = CategoryOrderManager::new(repository);
    manager.open(catalog.clone());

    let skip_prompt = yes || !ctx.config.confirm_reset;
    let confirm = || skip_prompt || prompt_yes_no("Reset category order to catalog order?");
    let reset = manager.reset_to_default(&confirm)?;
    manager.cancel();

    if !reset {
        println!("Reset cancelled.");
        return Ok(());
    }
    print_saved_order(ctx, &catalog)
}

/// Opens a session, applies `action` and saves when the order changed.
fn run_action(ctx: &Context, action: OrderAction) -> Result<()> {
    let catalog = ctx.load_catalog()?;
    let repository = ctx.order_repository()?;
    let mut manager = CategoryOrderManager::new(repository);
    manager.open(catalog.clone());

    if !manager.apply(&action)? {
        manager.cancel();
        eprintln!("Order unchanged (unknown id or already at the edge).");
        return Ok(());
    }
    manager.save()?;
    print_saved_order(ctx, &catalog)
}

fn print_saved_order(ctx: &Context, catalog: &[CatalogCategory]) -> Result<()> {
    let repository = ctx.order_repository()?;
    print!("{}", render(&apply_saved_order(catalog, repository.as_ref())));
    Ok(())
}

fn render(categories: &[CatalogCategory]) -> String {
    let mut out = String::new();
    for (index, category) in categories.iter().enumerate() {
        out.push_str(&format!("{}. {}\n", index + 1, category.name));
        for product in &category.products {
            out.push_str(&format!("     {}  {}\n", product.id, product.name));
        }
    }
    out
}

fn prompt_yes_no(question: &str) -> bool {
    print!("{} [y/N] ", question);
    if std::io::stdout().flush().is_err() {
        return false;
    }
    let mut answer = String::new();
    if std::io::stdin().lock().read_line(&mut answer).is_err() {
        return false;
    }
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

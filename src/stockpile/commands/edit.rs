use crate::commands::{CmdMessage, CmdResult};
use crate::error::{Result, StockpileError};
use crate::index::RowSelector;
use crate::inventory::Inventory;
use crate::model::Field;
use crate::store::KeyValueStore;
use crate::view::ViewState;

use super::helpers::resolve_selectors;

/// Inline edit of one cell. An invalid value leaves the record untouched and
/// reports why.
pub fn run<S: KeyValueStore>(
    inventory: &mut Inventory<S>,
    view: &ViewState,
    selector: &RowSelector,
    field: Field,
    raw: &str,
) -> Result<CmdResult> {
    let resolved = resolve_selectors(inventory.products(), view, std::slice::from_ref(selector))?;
    let mut result = CmdResult::default();

    for (sel, id) in resolved {
        match inventory.update(&id, field, raw) {
            Ok(product) => {
                result.add_message(CmdMessage::success(format!(
                    "Updated {} of {} ({})",
                    field, product.name, sel
                )));
                result.affected_products.push(product);
            }
            Err(StockpileError::Validation(errors)) => {
                result.add_message(CmdMessage::error(format!(
                    "{}: {}",
                    field,
                    errors.message_for(field)
                )));
                result = result.with_field_errors(errors);
            }
            Err(e) if e.is_storage() => result.add_message(CmdMessage::storage(&e)),
            Err(e) => return Err(e),
        }
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;
    use crate::validate::PRICE_INVALID;

    fn setup() -> Inventory<InMemoryStore> {
        Inventory::load(StoreFixture::new().with_mouse_and_keyboard().store)
    }

    #[test]
    fn edits_by_row_in_current_view() {
        let mut inv = setup();
        // Default view sorts by name: Keyboard is row 1.
        let result = run(
            &mut inv,
            &ViewState::default(),
            &RowSelector::Row(1),
            Field::Quantity,
            "10",
        )
        .unwrap();

        assert_eq!(result.affected_products[0].name, "Keyboard");
        assert_eq!(inv.products()[1].quantity, 10);
    }

    #[test]
    fn edits_by_id_prefix() {
        let mut inv = setup();
        let id = inv.products()[0].id.clone();
        let sel = RowSelector::Id(id.short().to_string());
        run(&mut inv, &ViewState::default(), &sel, Field::Name, "  Trackball ").unwrap();
        assert_eq!(inv.products()[0].name, "Trackball");
    }

    #[test]
    fn invalid_value_is_rejected() {
        let mut inv = setup();
        let before = inv.products().to_vec();
        let result = run(
            &mut inv,
            &ViewState::default(),
            &RowSelector::Row(2),
            Field::Price,
            "-5",
        )
        .unwrap();

        assert_eq!(result.messages[0].content, format!("price: {}", PRICE_INVALID));
        assert!(result.affected_products.is_empty());
        assert_eq!(inv.products(), &before[..]);
    }

    #[test]
    fn unknown_row_is_an_error() {
        let mut inv = setup();
        let err = run(
            &mut inv,
            &ViewState::default(),
            &RowSelector::Row(9),
            Field::Name,
            "x",
        );
        assert!(err.is_err());
    }
}

//! Behaviour every [`BasketStore`] must share, run against each backend.

use testresult::TestResult;

use crate::domain::{
    baskets::{models::BasketItem, store::BasketStore},
    menu::models::PizzaId,
};

const MARGHERITA: PizzaId = PizzaId::new(1);
const PEPPERONI: PizzaId = PizzaId::new(2);

pub(super) async fn add_then_read_round_trips(store: &dyn BasketStore) -> TestResult {
    store.add_item(MARGHERITA, 2).await?;

    assert_eq!(
        store.get_basket().await?.items,
        vec![BasketItem {
            pizza_id: MARGHERITA,
            quantity: 2
        }]
    );

    Ok(())
}

pub(super) async fn repeated_adds_accumulate(store: &dyn BasketStore) -> TestResult {
    store.add_item(PEPPERONI, 1).await?;
    store.add_item(PEPPERONI, 1).await?;
    store.add_item(PEPPERONI, 3).await?;

    assert_eq!(store.get_basket().await?.quantity_of(PEPPERONI), Some(5));

    Ok(())
}

pub(super) async fn add_does_not_validate_quantity_sign(store: &dyn BasketStore) -> TestResult {
    store.add_item(MARGHERITA, 1).await?;
    store.add_item(MARGHERITA, -1).await?;

    assert_eq!(store.get_basket().await?.quantity_of(MARGHERITA), Some(0));

    Ok(())
}

pub(super) async fn update_replaces_quantity(store: &dyn BasketStore) -> TestResult {
    store.add_item(MARGHERITA, 2).await?;

    let existed = store.update_quantity(MARGHERITA, 7).await?;

    assert!(existed, "entry should have existed");
    assert_eq!(store.get_basket().await?.quantity_of(MARGHERITA), Some(7));

    Ok(())
}

pub(super) async fn update_to_non_positive_matches_remove(store: &dyn BasketStore) -> TestResult {
    for quantity in [0, -3] {
        store.clear().await?;
        store.add_item(MARGHERITA, 2).await?;
        store.add_item(PEPPERONI, 1).await?;

        assert!(store.update_quantity(MARGHERITA, quantity).await?);

        let updated = store.get_basket().await?;

        store.clear().await?;
        store.add_item(MARGHERITA, 2).await?;
        store.add_item(PEPPERONI, 1).await?;

        assert!(store.remove_item(MARGHERITA).await?);

        assert_eq!(updated, store.get_basket().await?);
        assert_eq!(updated.quantity_of(MARGHERITA), None);
    }

    Ok(())
}

pub(super) async fn update_absent_entry_leaves_basket_untouched(
    store: &dyn BasketStore,
) -> TestResult {
    store.add_item(PEPPERONI, 3).await?;

    let before = store.get_basket().await?;

    for quantity in [5, 0] {
        let existed = store.update_quantity(MARGHERITA, quantity).await?;

        assert!(!existed, "absent entry should report false");
        assert_eq!(store.get_basket().await?, before);
    }

    Ok(())
}

pub(super) async fn remove_is_idempotent(store: &dyn BasketStore) -> TestResult {
    store.add_item(MARGHERITA, 1).await?;

    assert!(store.remove_item(MARGHERITA).await?);
    assert!(!store.remove_item(MARGHERITA).await?);
    assert!(store.get_basket().await?.is_empty());

    Ok(())
}

pub(super) async fn clear_empties_any_basket(store: &dyn BasketStore) -> TestResult {
    store.clear().await?;
    assert!(store.get_basket().await?.is_empty());

    store.add_item(MARGHERITA, 1).await?;
    store.add_item(PEPPERONI, 4).await?;
    store.clear().await?;

    assert!(store.get_basket().await?.is_empty());

    Ok(())
}

pub(super) async fn take_returns_contents_and_empties(store: &dyn BasketStore) -> TestResult {
    assert!(store.take().await?.is_empty());

    store.add_item(PEPPERONI, 4).await?;
    store.add_item(MARGHERITA, 1).await?;

    let taken = store.take().await?;

    assert_eq!(
        taken.items,
        vec![
            BasketItem {
                pizza_id: MARGHERITA,
                quantity: 1
            },
            BasketItem {
                pizza_id: PEPPERONI,
                quantity: 4
            },
        ]
    );
    assert!(store.get_basket().await?.is_empty());

    Ok(())
}

pub(super) async fn get_basket_is_sorted_by_pizza(store: &dyn BasketStore) -> TestResult {
    store.add_item(PizzaId::new(5), 1).await?;
    store.add_item(PizzaId::new(3), 1).await?;
    store.add_item(PizzaId::new(4), 1).await?;

    let ids: Vec<u32> = store
        .get_basket()
        .await?
        .items
        .iter()
        .map(|item| item.pizza_id.get())
        .collect();

    assert_eq!(ids, vec![3, 4, 5]);

    Ok(())
}

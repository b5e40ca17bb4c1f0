mod common;

use common::TestContext;
use raffle_backend::AppError;
use raffle_backend::models::{CreateRaffleItemRequest, UpdateRaffleItemRequest};

#[tokio::test]
async fn test_create_validates_quantity() {
    let ctx = TestContext::new().await;

    let zero = ctx.create_item("Shirt", 0).await;
    assert_eq!(zero.quantity, 0);

    let negative = ctx
        .items
        .create_item(CreateRaffleItemRequest {
            name: "Broken".to_string(),
            quantity: -1,
            item_pic: None,
        })
        .await;
    assert!(matches!(negative, Err(AppError::ValidationError(_))));
    assert_eq!(ctx.items.list_items().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_update_is_partial() {
    let ctx = TestContext::new().await;
    let item = ctx
        .items
        .create_item(CreateRaffleItemRequest {
            name: "Mug".to_string(),
            quantity: 3,
            item_pic: Some("/img/mug.png".to_string()),
        })
        .await
        .unwrap();

    let updated = ctx
        .items
        .update_item(
            item.id,
            UpdateRaffleItemRequest {
                quantity: Some(5),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.name, "Mug");
    assert_eq!(updated.quantity, 5);
    assert_eq!(updated.item_pic.as_deref(), Some("/img/mug.png"));

    let negative = ctx
        .items
        .update_item(
            item.id,
            UpdateRaffleItemRequest {
                quantity: Some(-2),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(negative, Err(AppError::ValidationError(_))));
    assert_eq!(ctx.item_row(item.id).await.unwrap().quantity, 5);
}

#[tokio::test]
async fn test_update_and_delete_unknown_item() {
    let ctx = TestContext::new().await;

    let update = ctx
        .items
        .update_item(
            404,
            UpdateRaffleItemRequest {
                name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(update, Err(AppError::NotFound(_))));

    let delete = ctx.items.delete_item(404).await;
    assert!(matches!(delete, Err(AppError::NotFound(_))));
}

#[tokio::test]
async fn test_delete_item() {
    let ctx = TestContext::new().await;
    let item = ctx.create_item("Mug", 1).await;

    ctx.items.delete_item(item.id).await.unwrap();
    assert!(ctx.item_row(item.id).await.is_none());
    assert!(matches!(
        ctx.items.delete_item(item.id).await,
        Err(AppError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_import_with_header() {
    let ctx = TestContext::new().await;

    let summary = ctx
        .items
        .import_items("name,quantity\nMug,3\nShirt,0\n")
        .await
        .unwrap();
    assert_eq!(summary.success_count, 2);
    assert_eq!(summary.fail_count, 0);

    let items = ctx.items.list_items().await.unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].name, "Mug");
    assert_eq!(items[0].quantity, 3);
    assert_eq!(items[1].name, "Shirt");
    assert_eq!(items[1].quantity, 0);

    // Shirt 数量为 0, 不会被抽中
    ctx.register_range(10000001, 4).await;
    let outcome = ctx.raffle.draw(4).await.unwrap();
    assert_eq!(outcome.winners.len(), 3);
    assert!(outcome.winners.iter().all(|w| w.item.name == "Mug"));
}

#[tokio::test]
async fn test_import_counts_bad_rows() {
    let ctx = TestContext::new().await;

    let summary = ctx
        .items
        .import_items("Pen,10,/img/pen.png\n,4\nCup,-1\nHat,many\nBag,2\n")
        .await
        .unwrap();
    assert_eq!(summary.success_count, 2);
    assert_eq!(summary.fail_count, 3);

    let items = ctx.items.list_items().await.unwrap();
    assert_eq!(items[0].item_pic.as_deref(), Some("/img/pen.png"));
}

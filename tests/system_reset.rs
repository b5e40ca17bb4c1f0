mod common;

use common::TestContext;
use raffle_backend::services::EventState;
use std::time::Duration;

#[tokio::test]
async fn test_reset_clears_everything() {
    let ctx = TestContext::new().await;
    ctx.register_range(10000001, 3).await;
    ctx.create_item("Mug", 2).await;
    ctx.system.start().unwrap();
    ctx.raffle.draw(2).await.unwrap();
    ctx.system.end();
    assert_eq!(ctx.system.state(), EventState::RaffleEnded);

    let state = ctx.system.reset().await.unwrap();
    assert_eq!(state, EventState::RegistrationOpen);
    assert!(ctx.event_state.is_registration_open());
    assert!(ctx.students.list_all().await.unwrap().is_empty());
    assert!(ctx.items.list_items().await.unwrap().is_empty());
    assert!(ctx.logs.list_logs().await.unwrap().is_empty());

    // 重置后可以重新登记同一学号
    ctx.students.register("10000001").await.unwrap();
}

#[tokio::test]
async fn test_logs_newest_first_with_item_details() {
    let ctx = TestContext::new().await;
    ctx.register_range(10000001, 2).await;
    let mug = ctx.create_item("Mug", 1).await;

    let first = ctx.raffle.draw(1).await.unwrap();
    let cap = ctx.create_item("Cap", 1).await;
    ctx.items.delete_item(mug.id).await.unwrap();
    let second = ctx.raffle.draw(1).await.unwrap();

    let logs = ctx.logs.list_logs().await.unwrap();
    assert_eq!(logs.len(), 2);
    assert_eq!(logs[0].student_id, second.winners[0].student_id);
    assert_eq!(logs[0].item.as_ref().map(|i| i.id), Some(cap.id));
    assert_eq!(logs[0].item.as_ref().map(|i| i.name.as_str()), Some("Cap"));
    assert_eq!(logs[1].student_id, first.winners[0].student_id);
    // 奖品删除后记录保留, 奖品信息为空
    assert!(logs[1].item.is_none());
    assert!(logs[0].timestamp >= logs[1].timestamp);
}

#[tokio::test]
async fn test_reset_waits_for_running_draw() {
    let ctx = TestContext::new().await;
    ctx.register_range(10000001, 2).await;
    ctx.create_item("Mug", 2).await;

    // 持有抽奖锁时重置不会开始
    let lock = ctx.raffle.draw_lock();
    let guard = lock.lock().await;
    let blocked = tokio::time::timeout(Duration::from_millis(100), ctx.system.reset()).await;
    assert!(blocked.is_err());
    assert_eq!(ctx.students.list_all().await.unwrap().len(), 2);
    drop(guard);

    ctx.system.reset().await.unwrap();
    assert!(ctx.students.list_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_concurrent_draw_and_reset_leave_no_rows() {
    let ctx = TestContext::new().await;
    ctx.register_range(10000001, 5).await;
    ctx.create_item("Mug", 5).await;

    // 无论谁先拿到锁, 重置之后都不会留下记录
    let (draw, reset) = tokio::join!(ctx.raffle.draw(5), ctx.system.reset());
    reset.unwrap();
    match draw {
        Ok(outcome) => assert_eq!(outcome.winners.len(), 5),
        Err(e) => assert!(matches!(e, raffle_backend::AppError::NoEligibleStudents)),
    }
    assert_eq!(ctx.log_count().await, 0);
    assert!(ctx.students.list_all().await.unwrap().is_empty());
}

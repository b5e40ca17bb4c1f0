use crate::entities::{
    raffle_item_entity as items, raffle_log_entity as logs, student_entity as students,
};
use crate::error::{AppError, AppResult};
use crate::models::{DrawOutcome, WinnerAssignment};
use crate::services::{raffle_item_service, student_service};
use chrono::Utc;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set, TransactionTrait};
use std::sync::Arc;
use tokio::sync::Mutex;

/// 单个中奖者的提交结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AwardCommit {
    Committed,
    /// 库存已被其它操作扣完, 本次未做任何修改
    ItemDepleted,
    /// 学生已中过奖, 本次未做任何修改
    StudentAlreadyAwarded,
}

/// 一次抽奖独占的奖品工作集
///
/// 保存快照中的奖品及本地剩余数量, 数量归零时 swap_remove, 不在多次抽奖间共享。
#[derive(Debug)]
struct ItemWorkingSet {
    entries: Vec<(items::Model, i32)>,
}

impl ItemWorkingSet {
    fn new(snapshot: Vec<items::Model>) -> Self {
        let entries = snapshot
            .into_iter()
            .filter(|item| item.is_available())
            .map(|item| {
                let remaining = item.quantity;
                (item, remaining)
            })
            .collect();
        Self { entries }
    }

    fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    /// 均匀随机选择一个下标 (不按库存加权)
    fn pick<R: Rng>(&self, rng: &mut R) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        Some(rng.gen_range(0..self.entries.len()))
    }

    fn item(&self, index: usize) -> &items::Model {
        &self.entries[index].0
    }

    /// 本地扣减 1, 归零后移出工作集
    fn consume(&mut self, index: usize) {
        let remaining = &mut self.entries[index].1;
        *remaining -= 1;
        if *remaining <= 0 {
            self.entries.swap_remove(index);
        }
    }

    fn remove(&mut self, index: usize) {
        self.entries.swap_remove(index);
    }
}

#[derive(Clone)]
pub struct RaffleService {
    pool: DatabaseConnection,
    draw_lock: Arc<Mutex<()>>,
}

impl RaffleService {
    pub fn new(pool: DatabaseConnection) -> Self {
        Self {
            pool,
            draw_lock: Arc::new(Mutex::new(())),
        }
    }

    /// 抽奖互斥锁, 与系统重置共享
    pub fn draw_lock(&self) -> Arc<Mutex<()>> {
        self.draw_lock.clone()
    }

    /// 抽取最多 n 位中奖者
    pub async fn draw(&self, n: u32) -> AppResult<DrawOutcome> {
        let mut rng = StdRng::from_entropy();
        self.draw_with_rng(n, &mut rng).await
    }

    /// 抽奖 (可注入随机源)
    ///
    /// 逻辑:
    /// 1. 一次性读取未中奖学生与有库存奖品的快照
    /// 2. 打乱学生顺序, 取前 min(n, 学生数) 位
    /// 3. 依次为每位中奖者均匀随机选择一个奖品
    /// 4. 每位中奖者的 标记中奖 / 扣减库存 / 写记录 在同一事务中提交
    /// 5. 奖品用完时提前结束, 返回已提交的部分结果
    ///
    /// 整个过程持有 draw_lock, 并发抽奖与重置依次执行。
    pub async fn draw_with_rng<R: Rng>(
        &self,
        n: u32,
        rng: &mut R,
    ) -> AppResult<DrawOutcome> {
        if n == 0 {
            return Err(AppError::ValidationError(
                "Invalid parameter 'n'. Must be a positive integer.".to_string(),
            ));
        }

        let _guard = self.draw_lock.lock().await;

        let mut candidates = student_service::find_available(&self.pool).await?;
        if candidates.is_empty() {
            return Err(AppError::NoEligibleStudents);
        }

        let snapshot = raffle_item_service::find_available(&self.pool).await?;
        if snapshot.is_empty() {
            return Err(AppError::NoEligibleItems);
        }

        let effective = (n as usize).min(candidates.len());
        candidates.shuffle(rng);
        candidates.truncate(effective);

        let mut working_set = ItemWorkingSet::new(snapshot);
        let mut winners = Vec::with_capacity(effective);

        for student in &candidates {
            match self.award_student(student, &mut working_set, rng).await? {
                Some(winner) => winners.push(winner),
                None if working_set.is_empty() => {
                    log::warn!(
                        "No more items available for student {}",
                        student.student_id
                    );
                    break;
                }
                None => {}
            }
        }

        log::info!(
            "Raffle finished: requested {}, effective {}, committed {}, items left in draw {}",
            n,
            effective,
            winners.len(),
            working_set.len()
        );

        Ok(DrawOutcome {
            requested: n,
            effective,
            winners,
        })
    }

    /// 为一位中奖者选择奖品并提交
    ///
    /// 库存被其它操作扣完的奖品移出工作集后重新选择; 学生已中过奖或奖品全部用完时返回 None。
    async fn award_student<R: Rng>(
        &self,
        student: &students::Model,
        working_set: &mut ItemWorkingSet,
        rng: &mut R,
    ) -> AppResult<Option<WinnerAssignment>> {
        while let Some(index) = working_set.pick(rng) {
            let item = working_set.item(index).clone();

            match self.commit_award(student, &item).await? {
                AwardCommit::Committed => {
                    working_set.consume(index);
                    return Ok(Some(WinnerAssignment::new(student, &item)));
                }
                AwardCommit::ItemDepleted => {
                    log::warn!("Item {} ran out during draw, trying another", item.id);
                    working_set.remove(index);
                }
                AwardCommit::StudentAlreadyAwarded => {
                    log::warn!("Student {} was already awarded", student.student_id);
                    return Ok(None);
                }
            }
        }
        Ok(None)
    }

    /// 在一个事务中为一位中奖者: 标记中奖、扣减库存、写中奖记录
    async fn commit_award(
        &self,
        student: &students::Model,
        item: &items::Model,
    ) -> AppResult<AwardCommit> {
        let txn = self.pool.begin().await?;

        if !student_service::mark_awarded(&txn, &student.student_id).await? {
            txn.rollback().await?;
            return Ok(AwardCommit::StudentAlreadyAwarded);
        }

        if !raffle_item_service::decrement(&txn, item.id).await? {
            txn.rollback().await?;
            return Ok(AwardCommit::ItemDepleted);
        }

        logs::ActiveModel {
            student_id: Set(student.student_id.clone()),
            item_id: Set(item.id),
            timestamp: Set(Utc::now()),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;
        Ok(AwardCommit::Committed)
    }
}

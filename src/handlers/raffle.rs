use crate::error::AppError;
use crate::models::*;
use crate::services::RaffleService;
use actix_web::{HttpResponse, ResponseError, Result, web};

/// 解析 n, 缺省为 1, 必须是正整数
fn parse_winner_count(raw: Option<&str>) -> Result<u32, AppError> {
    let Some(raw) = raw else {
        return Ok(1);
    };
    match raw.trim().parse::<u32>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(AppError::ValidationError(
            "Invalid parameter 'n'. Must be a positive integer.".to_string(),
        )),
    }
}

#[utoipa::path(
    get,
    path = "/raffle",
    tag = "raffle",
    params(("n" = Option<u32>, Query, description = "中奖人数 (默认1)")),
    responses(
        (status = 200, description = "抽奖完成, 以返回列表长度为准", body = [WinnerAssignment]),
        (status = 400, description = "n 非法, 或没有可抽的学生/奖品"),
        (status = 500, description = "服务器错误")
    )
)]
/// 抽取 n 位中奖者:
/// 1. n 超过可抽学生数时自动截断, 不报错
/// 2. 每位中奖者随机获得一个有库存的奖品
/// 3. 奖品用完时提前结束, 返回部分结果
pub async fn draw(
    raffle_service: web::Data<RaffleService>,
    query: web::Query<RaffleQuery>,
) -> Result<HttpResponse> {
    let n = match parse_winner_count(query.n.as_deref()) {
        Ok(n) => n,
        Err(e) => return Ok(e.error_response()),
    };

    match raffle_service.draw(n).await {
        Ok(outcome) => {
            let message = outcome.summary();
            Ok(HttpResponse::Ok().json(ApiResponse::success(outcome.winners, message)))
        }
        Err(e) => Ok(e.error_response()),
    }
}

pub fn raffle_config(cfg: &mut web::ServiceConfig) {
    cfg.route("/raffle", web::get().to(draw));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_winner_count() {
        assert_eq!(parse_winner_count(None).unwrap(), 1);
        assert_eq!(parse_winner_count(Some("5")).unwrap(), 5);
        assert_eq!(parse_winner_count(Some(" 2 ")).unwrap(), 2);
        assert!(parse_winner_count(Some("0")).is_err());
        assert!(parse_winner_count(Some("-3")).is_err());
        assert!(parse_winner_count(Some("abc")).is_err());
        // 不接受小数, 不截断为整数
        assert!(parse_winner_count(Some("1.5")).is_err());
        assert!(parse_winner_count(Some("")).is_err());
    }
}

use actix_web::web;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::handlers;
use crate::models::*;
use crate::services::EventState;

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::registration::register,
        handlers::student::list_students,
        handlers::student::create_student,
        handlers::raffle_item::list_items,
        handlers::raffle_item::create_item,
        handlers::raffle_item::update_item,
        handlers::raffle_item::delete_item,
        handlers::raffle_item::import_items,
        handlers::raffle::draw,
        handlers::logs::list_logs,
        handlers::system::get_state,
        handlers::system::start,
        handlers::system::end,
        handlers::system::reset,
    ),
    components(
        schemas(
            RegisterRequest,
            CreateStudentRequest,
            StudentResponse,
            CreateRaffleItemRequest,
            UpdateRaffleItemRequest,
            RaffleItemResponse,
            RaffleItemSummary,
            ImportSummary,
            WinnerAssignment,
            RaffleLogResponse,
            SystemStateResponse,
            EventState,
            ApiError,
        )
    ),
    tags(
        (name = "registration", description = "Student registration API"),
        (name = "student", description = "Student management API"),
        (name = "raffle_item", description = "Raffle item inventory API"),
        (name = "raffle", description = "Raffle draw and history API"),
        (name = "system", description = "Event state API"),
    ),
    info(
        title = "Raffle Backend API",
        version = "1.0.0",
        description = "Student registration and prize raffle REST API documentation"
    )
)]
pub struct ApiDoc;

pub fn swagger_config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", ApiDoc::openapi()),
    )
    .route(
        "/swagger-ui",
        web::get().to(|| async {
            actix_web::HttpResponse::Found()
                .append_header(("Location", "/swagger-ui/"))
                .finish()
        }),
    );
}

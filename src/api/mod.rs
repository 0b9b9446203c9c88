pub mod handlers;
pub mod routes;

pub use handlers::{get_points, process_receipt, PointsResponse, ProcessResponse};
pub use routes::create_router;

use utoipa::OpenApi;
use crate::{handlers, models};

#[derive(OpenApi)]
#[openapi(
    info(title = "Lighting service", description = "Demo device registry"),
    paths(handlers::list_devices, handlers::update_device),
    components(
        schemas(models::Device, models::UpdateDeviceRequest, models::ErrorBody)
    )
)]
pub struct ApiDoc;

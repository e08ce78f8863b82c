use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use serde::Serialize;

use crate::constants::{FETCH_ERROR_MESSAGE, PROVINCE};
use crate::error::WeatherError;
use crate::locations;
use crate::models::{GetWeatherReportRequest, LocationList};
use crate::service::WeatherService;

/// MCP front end over the weather lookup
#[derive(Clone)]
pub struct WeatherTools {
    service: WeatherService,
    tool_router: ToolRouter<Self>,
}

impl WeatherTools {
    pub fn new(service: WeatherService) -> Self {
        Self {
            service,
            tool_router: Self::tool_router(),
        }
    }
}

fn json_content<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(format!("Failed to encode result: {}", e), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

#[tool_handler]
impl ServerHandler for WeatherTools {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "jiangxi-weather".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "Current conditions and a five-day forecast for cities and counties of \
                Jiangxi province, powered by Open-Meteo. Call list_locations to discover \
                valid location ids."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl WeatherTools {
    /// Gets the normalized weather report for a Jiangxi location
    #[tool(description = "Get current weather and a five-day forecast for a Jiangxi location. Provide a location id such as 'nanchang', 'jiujiang' or 'ganzhou' (see list_locations).")]
    async fn get_weather_report(
        &self,
        Parameters(request): Parameters<GetWeatherReportRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("Getting weather report for: {}", request.location_id);

        let report = self
            .service
            .get_weather_report(&request.location_id)
            .await
            .map_err(|e| match e {
                WeatherError::LocationNotFound(id) => McpError::invalid_params(
                    format!("Unknown location id '{}'. Use list_locations to see valid ids.", id),
                    None,
                ),
                other => {
                    tracing::error!(kind = other.kind(), error = %other, "Weather tool failed");
                    McpError::internal_error(FETCH_ERROR_MESSAGE, None)
                }
            })?;

        json_content(&report)
    }

    /// Lists every location id the service knows
    #[tool(description = "List the Jiangxi location ids, display names and coordinates accepted by get_weather_report.")]
    async fn list_locations(&self) -> Result<CallToolResult, McpError> {
        json_content(&LocationList {
            province: PROVINCE,
            locations: locations::all(),
        })
    }
}

/// Network adapters for the portal API
mod rest_gateway;

pub use rest_gateway::PortalApiClient;

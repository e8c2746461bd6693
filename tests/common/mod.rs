pub mod dashboard_server;
pub mod external_server;

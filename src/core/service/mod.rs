pub mod system_service;

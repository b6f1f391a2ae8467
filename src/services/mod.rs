pub mod directory_service;

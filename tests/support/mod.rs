#![allow(dead_code)]

pub mod botlens_env;
pub mod mock_service;

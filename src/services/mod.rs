pub mod pricing_model;
pub mod valuation_service;

pub mod valuation_controller;

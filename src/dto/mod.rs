pub mod valuation_dto;

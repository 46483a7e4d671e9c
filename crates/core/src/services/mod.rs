pub mod trade_calculator;

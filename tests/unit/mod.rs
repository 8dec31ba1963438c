/// Unit test target: public domain types and calculations
mod basic_tests;

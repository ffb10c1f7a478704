mod entity_tests;
mod token_tests;

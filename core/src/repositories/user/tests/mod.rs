mod memory_tests;
mod mock_tests;

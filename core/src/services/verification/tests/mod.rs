mod dev_tests;

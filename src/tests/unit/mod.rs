mod paginator_tests;

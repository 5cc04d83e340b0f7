mod removal_tests;

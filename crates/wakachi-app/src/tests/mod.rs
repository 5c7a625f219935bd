mod output_tests;

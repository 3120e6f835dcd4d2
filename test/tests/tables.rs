mod kleene {
    tern_test_macros::test_tables!("../test-data/tables");
}

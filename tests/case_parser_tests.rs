use stanza::errors::ErrorKind;
use stanza::model::TestCase;
use stanza::parsing::parse_test_case;

const DEGENERATE: &str = "# TEST CASE DEGENERATE\n\
    Test case description\n\
    ## TEST\n\
    Test description\n\
    ### DATA\n\
    | PARAM1   | PARAM2 | =ERROR= |\n\
    |----------|--------|---------|\n\
    | FOO      | 12     |         |\n\
    | __NULL__ | 0      |         |\n\
    | BAR      | -18    |         |\n\
    |          | 12     |         |\n";

const SETUP_TEARDOWN: &str = "# TEST CASE CLIENT$BALANCES\n\
    Fixture hook extraction\n\
    ### BEFORE ALL\n\
    - Setup client\n\
    - Ships reproduce with xray vision\n\
    - With melons drink maple syrup\n\
    ### AFTER ALL\n\
    - Remove clients\n\
    - Fraticinidas ire\n\
    ### BEFORE EACH TEST\n\
    - Set client balance\n\
    - Grace life and passion\n\
    - With tunas drink tea\n\
    ### AFTER EACH TEST\n\
    - Remove transactions\n\
    - Be mysterious\n\
    ### BEFORE EACH ROW\n\
    - Contencio flavum vita est\n\
    - Everyone just loves the fierceness of chicken cheesecake.\n\
    ### AFTER EACH ROW\n\
    - Always solitary yearn the spiritual saint.\n\
    ## TEST\n\
    Test description\n\
    ### DATA\n\
    | P1 |\n\
    |----|\n\
    | 1  |\n";

#[test]
fn parses_a_degenerate_procedure_case() {
    let TestCase::Procedure(case) = parse_test_case(DEGENERATE).unwrap() else {
        panic!("expected the procedure dialect");
    };
    assert_eq!(case.procedure_name, "DEGENERATE");
    assert_eq!(case.description, "Test case description");
    assert_eq!(case.tests.len(), 1);

    let test = &case.tests[0];
    assert_eq!(test.description, "Test description");
    assert_eq!(
        test.arguments.headers(),
        ["PARAM1", "PARAM2", "=ERROR="]
    );
    assert_eq!(
        test.arguments.rows(),
        [
            ["FOO", "12", ""],
            ["__NULL__", "0", ""],
            ["BAR", "-18", ""],
            ["", "12", ""],
        ]
    );
}

#[test]
fn a_case_can_hold_multiple_tests_with_no_hooks() {
    let text = "# TEST CASE MULTI$PASS\n\
        Two tests\n\
        ## TEST\n\
        First\n\
        ### DATA\n\
        | P1 |\n\
        |----|\n\
        | 1  |\n\
        ## TEST\n\
        Second\n\
        ### DATA\n\
        | P1 |\n\
        |----|\n\
        | 2  |\n";
    let TestCase::Procedure(case) = parse_test_case(text).unwrap() else {
        panic!("expected the procedure dialect");
    };
    assert_eq!(case.tests.len(), 2);
    assert!(case.hooks.is_empty());
}

#[test]
fn extracts_all_six_hook_sections_in_order() {
    let hooks = parse_test_case(SETUP_TEARDOWN).unwrap().hooks().clone();

    assert_eq!(hooks.before_all.len(), 3);
    assert_eq!(hooks.before_all[0], "Setup client");
    assert_eq!(hooks.before_all[1], "Ships reproduce with xray vision");
    assert_eq!(hooks.before_all[2], "With melons drink maple syrup");

    assert_eq!(hooks.after_all, vec!["Remove clients", "Fraticinidas ire"]);
    assert_eq!(
        hooks.before_each_test,
        vec!["Set client balance", "Grace life and passion", "With tunas drink tea"]
    );
    assert_eq!(
        hooks.after_each_test,
        vec!["Remove transactions", "Be mysterious"]
    );
    assert_eq!(hooks.before_each_row.len(), 2);
    assert_eq!(hooks.before_each_row[0], "Contencio flavum vita est");
    assert_eq!(
        hooks.after_each_row,
        vec!["Always solitary yearn the spiritual saint."]
    );
}

#[test]
fn blank_hook_sections_yield_empty_lists() {
    let text = "# TEST CASE CLIENT$BALANCES\n\
        Blank sections\n\
        ### BEFORE ALL\n\
        ### AFTER ALL\n\
        ### BEFORE EACH TEST\n\
        ### AFTER EACH TEST\n\
        ### BEFORE EACH ROW\n\
        ### AFTER EACH ROW\n\
        ## TEST\n\
        Test description\n\
        ### DATA\n\
        | P1 |\n\
        |----|\n\
        | 1  |\n";
    let case = parse_test_case(text).unwrap();
    assert!(case.hooks().is_empty());
}

#[test]
fn parses_a_minimal_generic_case() {
    let text = "# TEST CASE\n\
        Minimal generic test\n\
        ## TEST\n\
        This isn't really a test\n\
        ```\n\
        SELECT * FROM DUAL;\n\
        ```\n";
    let TestCase::Generic(case) = parse_test_case(text).unwrap() else {
        panic!("expected the generic dialect");
    };
    assert_eq!(case.description, "Minimal generic test");
    assert!(case.hooks.is_empty());
    assert_eq!(case.tests.len(), 1);
    assert_eq!(case.tests[0].description, "This isn't really a test");
    assert_eq!(case.tests[0].body, "SELECT * FROM DUAL;");
}

#[test]
fn parses_a_generic_case_with_case_hooks_and_two_tests() {
    let text = "# TEST CASE\n\
        Example\n\
        ### BEFORE ALL\n\
        - Setup client\n\
        - Ships reproduce with xray vision\n\
        - With melons drink maple syrup\n\
        ### AFTER ALL\n\
        - Remove clients\n\
        - Fraticinidas ire\n\
        ### BEFORE EACH TEST\n\
        - Set client balance\n\
        - Grace life and passion\n\
        - With tunas drink tea\n\
        ### AFTER EACH TEST\n\
        - Remove transactions\n\
        - Be mysterious\n\
        ## TEST\n\
        Works fine\n\
        ```\nBEGIN\n  NULL;\nEND;\n```\n\
        ## TEST\n\
        Contains a syntax error\n\
        ```\nBEGIN\n  NUKLL;\nEND;\n```\n";
    let TestCase::Generic(case) = parse_test_case(text).unwrap() else {
        panic!("expected the generic dialect");
    };
    assert_eq!(case.description, "Example");
    assert_eq!(case.hooks.before_all.len(), 3);
    assert_eq!(case.hooks.before_all[0], "Setup client");
    assert_eq!(case.hooks.after_all.len(), 2);
    assert_eq!(case.hooks.before_each_test.len(), 3);
    assert_eq!(case.hooks.before_each_test[2], "With tunas drink tea");
    assert_eq!(case.hooks.after_each_test.len(), 2);
    assert_eq!(case.hooks.after_each_test[0], "Remove transactions");
    assert!(case.hooks.before_each_row.is_empty());
    assert!(case.hooks.after_each_row.is_empty());
    assert_eq!(case.tests.len(), 2);
    assert!(case.tests[1].body.contains("NUKLL;"));
    assert_eq!(case.tests[1].description, "Contains a syntax error");
}

#[test]
fn a_generic_case_rejects_a_data_section() {
    let err = parse_test_case(
        "# TEST CASE\n\
         Generic with data\n\
         ## TEST\n\
         Blah\n\
         ```\nfoo\n```\n\
         ### DATA\n\
         | P1 |\n\
         |----|\n\
         | 12 |\n",
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidTestCaseFormat);
}

#[test]
fn a_procedure_case_requires_a_data_section_in_every_block() {
    let err = parse_test_case(
        "# TEST CASE SOME$PROC\n\
         Description\n\
         ## TEST\n\
         Blah\n\
         ```\nfoo\n```\n",
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingDataSection);
}

#[test]
fn an_empty_file_is_not_a_test_case() {
    let err = parse_test_case("").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidTestCaseFormat);
}

#[test]
fn a_file_without_test_blocks_is_not_a_test_case() {
    let err = parse_test_case("# TEST CASE SOME$PROC\nJust a description\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidTestCaseFormat);
}

#[test]
fn a_header_with_a_blank_procedure_name_is_rejected() {
    let err = parse_test_case(
        "# TEST CASE   \n\
         Description\n\
         ## TEST\n\
         Blah\n\
         ```\nfoo\n```\n",
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidTestCaseFormat);
}

#[test]
fn a_header_with_trailing_whitespace_after_the_name_still_parses() {
    let case = parse_test_case(
        "# TEST CASE SOME$PROC  \n\
         Description\n\
         ## TEST\n\
         Blah\n\
         ### DATA\n\
         | P1 |\n\
         |----|\n\
         | 1  |\n",
    )
    .unwrap();
    let TestCase::Procedure(case) = case else {
        panic!("expected the procedure dialect");
    };
    assert_eq!(case.procedure_name, "SOME$PROC");
}

#[test]
fn a_file_without_the_case_header_is_not_a_test_case() {
    let err = parse_test_case("## TEST\nBlah\n```\nfoo\n```\n").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidTestCaseFormat);
}

#[test]
fn an_empty_case_description_is_rejected() {
    let err = parse_test_case(
        "# TEST CASE DEGENERATE\n\
         ## TEST\n\
         Test description\n\
         ### DATA\n\
         | P1 |\n\
         |----|\n\
         | 1  |\n",
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingDescription);
}

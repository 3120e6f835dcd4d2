use proc_macro::TokenStream;
use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
};

use proc_macro2::Span;
use quote::quote;
use syn::{self, Ident, LitStr};
use walkdir::WalkDir;

struct TestCase {
    operator: String,
    table_path: PathBuf,
}

/// Generates one test per `<operator>.table` file under the given directory.
///
/// Each non-blank line of a table that does not start with `#` has the form
/// `<operand>... => <expected>`.
#[proc_macro]
pub fn test_tables(input: TokenStream) -> TokenStream {
    let path_lit = syn::parse_macro_input!(input as LitStr);
    let rel_path = path_lit.value();

    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let base_path = Path::new(&manifest_dir).join(&rel_path);

    if !base_path.exists() {
        panic!(
            "Test data directory does not exist: {}",
            base_path.display()
        );
    }

    let mut test_cases = Vec::new();

    for entry in WalkDir::new(&base_path)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(Result::ok)
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        let file_name = match path.file_name().and_then(OsStr::to_str) {
            Some(name) => name,
            None => continue,
        };

        if let Some(operator) = file_name.strip_suffix(".table") {
            test_cases.push(TestCase {
                operator: operator.to_string(),
                table_path: path.to_path_buf(),
            });
        }
    }

    test_cases.sort_by(|a, b| a.operator.cmp(&b.operator));

    let tests = test_cases.iter().map(|tc| {
        let test_name = format!("table_{}", tc.operator);
        let test_ident = Ident::new(&test_name, Span::call_site());

        let table_path = tc.table_path.to_str().expect("Invalid UTF-8 in path");
        let operator = &tc.operator;

        quote! {
            #[test]
            fn #test_ident() -> Result<(), Box<dyn std::error::Error>> {
                check_table(#table_path, #operator)?;
                Ok(())
            }
        }
    });

    let expanded = quote! {
        use std::fs::read_to_string;
        use tern_core::{Operator, Value};

        fn check_table(table_path: &str, operator: &str) -> Result<(), Box<dyn std::error::Error>> {
            let op: Operator = operator.parse()?;
            let contents = read_to_string(table_path)?;

            let mut checked = 0;
            for (lineno, line) in contents.lines().enumerate() {
                let line = line.trim();
                if line.is_empty() || line.starts_with('#') {
                    continue;
                }

                let (operands, expected) = line
                    .split_once("=>")
                    .ok_or_else(|| format!("{}:{}: missing `=>`", table_path, lineno + 1))?;
                let operands = operands
                    .split_whitespace()
                    .map(str::parse)
                    .collect::<Result<Vec<Value>, _>>()?;
                let expected: Value = expected.trim().parse()?;

                let actual = op.apply(&operands)?;
                assert_eq!(
                    actual,
                    expected,
                    "{} {:?} at {}:{}",
                    op,
                    operands,
                    table_path,
                    lineno + 1
                );
                checked += 1;
            }

            assert!(checked > 0, "No cases in table: {}", table_path);
            Ok(())
        }

        #(#tests)*
    };

    TokenStream::from(expanded)
}

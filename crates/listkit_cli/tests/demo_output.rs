use std::process::Command;

fn run_demo(binary: &str) -> Vec<String> {
    let output = Command::new(binary)
        .output()
        .expect("demo binary should start");
    assert!(output.status.success(), "demo exited with {}", output.status);
    String::from_utf8(output.stdout)
        .expect("demo output should be UTF-8")
        .lines()
        .map(str::to_string)
        .collect()
}

fn assert_has_line(lines: &[String], expected: &str) {
    assert!(
        lines.iter().any(|line| line == expected),
        "missing line `{expected}` in output:\n{}",
        lines.join("\n")
    );
}

#[test]
fn good_practices_prints_users_and_email_check() {
    let lines = run_demo(env!("CARGO_BIN_EXE_good_practices"));
    assert_eq!(
        lines,
        vec!["User: Alice", "User: Bob", "Is email valid? true"]
    );
}

#[test]
fn collections_prints_every_step_in_order() {
    let lines = run_demo(env!("CARGO_BIN_EXE_collections"));
    let headers = lines
        .iter()
        .filter(|line| line.starts_with("=== Step"))
        .map(String::as_str)
        .collect::<Vec<_>>();
    assert_eq!(
        headers,
        vec![
            "=== Step 1: Declare Collections ===",
            "=== Step 2: Iterations ===",
            "=== Step 3: Transformations ===",
            "=== Step 4: Map Safe Access ===",
            "=== Step 5: Reusable Utilities ===",
            "=== Step 6: Performance Bonus ===",
        ]
    );
}

#[test]
fn collections_reports_utility_results() {
    let lines = run_demo(env!("CARGO_BIN_EXE_collections"));

    assert_has_line(&lines, "bag before=[1, 2, 2]");
    assert_has_line(&lines, "bag after=[1, 2, 2, 2]");
    assert_has_line(&lines, "counts={\"done\": 3}");
    assert_has_line(&lines, "filtered=[\"Study Rust\", \"Study Rust\"]");
    assert_has_line(
        &lines,
        "sections=[(Done, [\"Study Rust\", \"Tests\"]), (To Do, [\"Study Rust\", \"Write UI Compose\"])]",
    );
    assert_has_line(&lines, "stats=Stats(total=4, done=2, ratio=0.5)");
    assert_has_line(&lines, "v1=0, v2=0, v3=1");
    assert_has_line(&lines, "to_map={\"a\": 9, \"b\": 2}");
    assert_has_line(
        &lines,
        "by_user_id={1=User(id=1, name=Ali dup), 2=User(id=2, name=Sara)}",
    );
    assert_has_line(&lines, "first_big_eager=901");
    assert_has_line(&lines, "first_big_lazy=901");
}

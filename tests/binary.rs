use std::process::Command;

const EXPECTED: &str = "1 2 3 4 \nDaniel Carlos Maria \n";

fn run(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_print_cont"))
        .args(args)
        .output()
        .unwrap()
}

#[test]
fn prints_both_lists() {
    let out = run(&[]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), EXPECTED);
    assert!(out.stderr.is_empty());
}

#[test]
fn arguments_are_ignored() {
    for args in &[&["extra"][..], &["-v"], &["--help", "x"]] {
        let out = run(args);
        assert_eq!(out.status.code(), Some(0));
        assert_eq!(String::from_utf8(out.stdout).unwrap(), EXPECTED);
    }
}

fn main() -> anyhow::Result<()> {
    let v = vec![1, 2, 3, 4];
    let w: Vec<String> = vec!["Daniel".into(), "Carlos".into(), "Maria".into()];

    print_cont::print_stdout(&v)?;
    print_cont::print_stdout(&w)?;

    Ok(())
}

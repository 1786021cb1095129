use shiki::openapi;

fn main() -> eyre::Result<()> {
    println!("{}", openapi::api_document().to_pretty_json()?);
    Ok(())
}

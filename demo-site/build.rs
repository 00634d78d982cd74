use folio::render_at_build_time;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("cargo:rerun-if-changed=folio.yaml");

    let out_dir = std::env::var("OUT_DIR")?;
    render_at_build_time("folio.yaml", &format!("{}/index.html", out_dir)).await?;

    Ok(())
}

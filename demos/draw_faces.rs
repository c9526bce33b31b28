use anyhow::Result;
use faceplot::draw::rerun::{draw_faces, start_session};
use faceplot::io::parse_faces_str;
use faceplot::style::bind_styles;
use faceplot::PlotConfig;

fn main() -> Result<()> {
    // Same layout as demos/orig.txt
    let file = parse_faces_str(include_str!("orig.txt"))?;
    for face in &file.faces {
        println!("{:.1} area={:.2}", face, face.area());
    }

    let config = PlotConfig::new();
    let styled = bind_styles(&file.faces, &file.annotations)?;

    // Draw the faces in a 2D view
    let session = start_session(&config)?;
    draw_faces(&session, &styled, &config)?;

    Ok(())
}

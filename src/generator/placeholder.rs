use quick_xml::escape::escape;

const WIDTH: u32 = 200;
const HEIGHT: u32 = 300;
const LINE_LENGTH: usize = 16;
const LINE_HEIGHT: u32 = 22;
const MAX_LINES: usize = 4;

/// Stand-in poster: the movie title on a blank card, encoded as SVG.
pub fn render(title: &str) -> Vec<u8> {
    let mut lines = wrap(title, LINE_LENGTH);
    if lines.is_empty() {
        lines.push("?".to_owned());
    }

    let mut svg = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = WIDTH,
        h = HEIGHT
    );
    svg += &format!(
        r##"<rect x="0.5" y="0.5" width="{}" height="{}" fill="#ffffff" stroke="#e6e6e6"/>"##,
        WIDTH - 1,
        HEIGHT - 1
    );

    // Film glyph
    let glyph_x = (WIDTH - 30) / 2;
    svg += &format!(
        r##"<rect x="{}" y="40" width="30" height="30" rx="3" fill="none" stroke="#d3d3d3" stroke-width="2"/>"##,
        glyph_x
    );
    svg += &format!(
        r##"<line x1="{x}" y1="48" x2="{x2}" y2="48" stroke="#d3d3d3"/><line x1="{x}" y1="62" x2="{x2}" y2="62" stroke="#d3d3d3"/>"##,
        x = glyph_x,
        x2 = glyph_x + 30
    );

    let first_line_y = HEIGHT / 2 - (lines.len() as u32 - 1) * LINE_HEIGHT / 2;
    svg += &format!(
        r##"<text x="{}" y="{}" text-anchor="middle" font-family="sans-serif" font-size="18" font-weight="bold" fill="#a9a9a9">"##,
        WIDTH / 2,
        first_line_y
    );
    for (index, line) in lines.iter().enumerate() {
        let dy = if index == 0 { 0 } else { LINE_HEIGHT };
        svg += &format!(
            r#"<tspan x="{}" dy="{}">{}</tspan>"#,
            WIDTH / 2,
            dy,
            escape(line.as_str())
        );
    }
    svg += "</text></svg>";
    svg.into_bytes()
}

fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut lines: Vec<String> = Vec::new();
    for word in text.split_whitespace() {
        match lines.last_mut() {
            Some(line) if line.chars().count() + 1 + word.chars().count() <= width => {
                line.push(' ');
                line.push_str(word);
            }
            _ => lines.push(word.to_owned()),
        }
    }
    if lines.len() > MAX_LINES {
        lines.truncate(MAX_LINES);
        if let Some(last) = lines.last_mut() {
            last.push_str("...");
        }
    }
    lines
}

use mask_contours::{find_contours, MaskF32, TraceOptions};

fn main() {
    // Demo stub: builds a square mask with a hole and traces its borders
    let w = 16usize;
    let h = 16usize;
    let mut values = vec![0.0f32; w * h];
    for y in 4..12 {
        for x in 4..12 {
            values[y * w + x] = 1.0;
        }
    }
    for y in 7..9 {
        for x in 7..9 {
            values[y * w + x] = 0.0;
        }
    }

    let mask = match MaskF32::new(w, h, &values) {
        Ok(mask) => mask,
        Err(e) => {
            eprintln!("bad demo mask: {e}");
            std::process::exit(1);
        }
    };
    let contours = match find_contours(&mask, TraceOptions::default()) {
        Ok(contours) => contours,
        Err(e) => {
            eprintln!("trace failed: {e}");
            std::process::exit(1);
        }
    };

    println!("found {} contours", contours.len());
    for contour in &contours {
        let [cx, cy] = contour.centroid();
        println!(
            "#{} {:?} points={} area={:.1} centroid=({cx:.2}, {cy:.2})",
            contour.id.0,
            contour.kind,
            contour.len(),
            contour.signed_area()
        );
    }
}

// Example: a simulated host feeding page events into `Page` at 60fps.
use showcase::Direction;
use showcase_adapter::{Controls, Page, PageOptions, WheelEvent};

fn main() {
    let mut page: Page<&'static str> = Page::new(PageOptions::default().with_navbar_height(64));
    page.register_category(0, ["brand-a", "brand-b", "brand-c"], Controls::both())
        .unwrap();
    page.register_category(1, ["print-a", "print-b"], Controls::none())
        .unwrap();

    let sections = |id: &str| match id {
        "showcase" => Some(900),
        "contact" => Some(2400),
        _ => None,
    };

    let mut now_ms = 0u64;
    let mut frame = 0u64;
    loop {
        match frame {
            0 => {
                let req = page.on_anchor_click("#showcase", now_ms, sections);
                println!("t={now_ms}ms anchor request={req:?}");
            }
            3 => {
                let r = page.on_wheel(0, WheelEvent::new(24.0, 3.0, false), now_ms);
                println!("t={now_ms}ms wheel -> {r:?}");
            }
            5 => {
                // Still cooling down and mid-transition.
                let r = page.on_wheel(0, WheelEvent::new(24.0, 3.0, false), now_ms);
                println!("t={now_ms}ms wheel -> {r:?}");
            }
            10 => page.on_pointer_down(1, 420.0),
            12 => {
                let r = page.on_pointer_up(1, 300.0, now_ms);
                println!("t={now_ms}ms drag -> {r:?}");
            }
            50 => {
                let r = page.on_button(0, Direction::Prev, now_ms);
                println!("t={now_ms}ms prev button -> {r:?}");
            }
            _ => {}
        }

        let out = page.tick(now_ms);
        if let (Some(off), Some(navbar)) = (out.scroll_offset, out.navbar) {
            if frame % 5 == 0 {
                println!("t={now_ms}ms scroll={off} navbar={navbar}");
            }
        }
        for t in &out.completed {
            let indicator = page.carousel().page_indicator(t.category).unwrap();
            println!(
                "t={now_ms}ms category {} settled on item {} (page {:?})",
                t.category,
                t.to,
                indicator.map(|p| p.current_page_text())
            );
        }

        if frame > 50 && page.next_deadline(now_ms).is_none() {
            break;
        }
        now_ms += 16;
        frame += 1;
    }

    for snap in page.carousel().snapshots() {
        let labels: Vec<&str> = snap.states.iter().map(|s| s.class_name()).collect();
        println!("category {}: {labels:?}", snap.category);
    }
}

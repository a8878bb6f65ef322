// Example: drive one showcase category with a simulated clock.
use showcase::{CarouselController, CarouselOptions, CategoryIndex, Direction, PageIndicator};

fn print_states(c: &CarouselController<&'static str>, now_ms: u64) {
    let stack = c.stack(0).unwrap();
    let labels: Vec<String> = stack
        .keys()
        .iter()
        .zip(stack.states())
        .map(|(key, state)| format!("{key}:{}", state.class_name()))
        .collect();
    let page = c
        .page_indicator(0)
        .unwrap()
        .map(|p| p.current_page_text())
        .unwrap_or_default();
    println!("t={now_ms}ms page={page} [{}]", labels.join(" "));
}

fn main() {
    let options = CarouselOptions::new().with_on_page_change(Some(
        |category: CategoryIndex, page: &PageIndicator| {
            println!("category {category} -> page {}", page.current_page());
        },
    ));
    let mut c = CarouselController::new(options);
    c.register_category(0, ["poster", "logo", "flyer"]).unwrap();

    let script = [
        (0u64, Direction::Next),
        (100, Direction::Next), // dropped: still transitioning
        (600, Direction::Prev),
        (1200, Direction::Prev),
    ];

    let mut now_ms = 0u64;
    for (at, direction) in script {
        while now_ms < at {
            now_ms += 50;
            c.tick(now_ms);
        }
        let started = c.navigate(0, direction, now_ms).unwrap();
        println!("t={now_ms}ms {direction:?} started={}", started.is_some());
        print_states(&c, now_ms);
    }

    while let Some(deadline) = c.next_deadline() {
        now_ms = deadline;
        c.tick(now_ms);
    }
    print_states(&c, now_ms);
}

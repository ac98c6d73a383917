extern crate est_platform;

use std::{cell::Cell, rc::Rc};

use est_platform::prelude::*;

fn main() {
    let quit = Rc::new(Cell::new(false));
    let quit_request = quit.clone();

    let desc = PlatformDesc::new()
        .with_size(800, 600)
        .with_title("Event Log Example")
        .with_application_name("est-event-log")
        .with_flags(Flags::Resizable | Flags::Vsync)
        .on_log_info(|msg| println!("[info] {}", msg))
        .on_log_warn(|msg| println!("[warn] {}", msg))
        .on_log_error(|msg| eprintln!("[error] {}", msg))
        .on_exit_request(move || quit_request.set(true))
        .on_key(|key, pressed| println!("key {:?} {}", key, if pressed { "down" } else { "up" }))
        .on_text(|text| println!("text {:?}", text))
        .on_mouse_button(|button, pressed| println!("mouse {:?} {}", button, pressed))
        .on_mouse_wheel(|x, y| println!("wheel {} {}", x, y))
        .on_controller_connect(|info| {
            println!(
                "{:?} {} connected as #{} ({} buttons, {} axes)",
                info.kind, info.name, info.index, info.button_count, info.axis_count
            )
        })
        .on_controller_disconnect(|index, kind| println!("{:?} #{} disconnected", kind, index))
        .on_controller_button(|index, button, pressed| {
            println!("controller #{} {:?} {}", index, button, pressed)
        })
        .on_controller_axis(|index, axis, value| {
            println!("controller #{} {:?} {:.3}", index, axis, value)
        });

    let mut platform = est_platform::create_platform(desc);
    platform.startup().expect("Failed to start platform");

    println!("user path: {:?}", platform.user_path());
    println!("renderer: {}", platform.renderer());

    let mut clear = ClearCommand::color(None, Rect::with_size(800, 600), Color::CORNFLOWERBLUE);

    while !quit.get() {
        platform.poll_events();

        let size = platform.size_in_pixels();
        clear.clip = Rect::with_size(size.x, size.y);

        platform.begin_frame();
        platform.clear(&clear);
        platform.end_frame();

        std::thread::sleep(std::time::Duration::from_millis(16));
    }

    platform.shutdown();
}

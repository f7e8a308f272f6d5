use chrono::NaiveDate;
use festival_map::location::{CITY_CENTER, DEFAULT_ZOOM};
use festival_map::schedule::{format_option_date, format_popup_date};
use festival_map::{
    ClickOutcome, Config, Location, MapControl, ScheduleView, load_configured_schedule,
    load_configured_venues, load_schedule_from_json, telemetry,
};
use std::io::{self, Write};
use std::process;

/// Stand-in for the map widget: echoes camera moves to the terminal.
struct TerminalMap {
    center: Location,
    zoom: u8,
}

impl Default for TerminalMap {
    fn default() -> Self {
        Self {
            center: CITY_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl MapControl for TerminalMap {
    fn pan_to(&mut self, location: Location) {
        self.center = location;
        println!("Map centered on {:.4}, {:.4}", location.lat, location.lng);
    }

    fn set_zoom(&mut self, zoom: u8) {
        self.zoom = zoom;
        println!("Map zoom set to {}", zoom);
    }
}

fn render_row<'a>(widths: &[usize], cells: impl Iterator<Item = &'a str>) -> String {
    let mut line = String::from("|");
    for (ci, cell) in cells.enumerate() {
        line.push(' ');
        line.push_str(cell);
        let pad = widths[ci].saturating_sub(cell.chars().count());
        line.push_str(&" ".repeat(pad));
        line.push_str(" |");
    }
    line.push('\n');
    line
}

fn render_text_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (ci, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            if len > widths[ci] {
                widths[ci] = len;
            }
        }
    }

    let mut sep = String::new();
    sep.push('+');
    for w in &widths {
        sep.push_str(&"-".repeat(*w + 2));
        sep.push('+');
    }

    let mut out = String::new();
    out.push_str(&sep);
    out.push('\n');
    out.push_str(&render_row(&widths, headers.iter().copied()));
    out.push_str(&sep);
    out.push('\n');
    for row in rows {
        out.push_str(&render_row(&widths, row.iter().map(String::as_str)));
    }
    out.push_str(&sep);
    out.push('\n');
    out
}

fn print_help() {
    println!(
        "Commands:\n  help                               Show this help\n  show                               Show the event list for the current date filter\n  dates                              List schedule dates\n  locations                          List selectable locations\n  date <YYYY-MM-DD|all>              Set the date filter\n  location <name...|all>             Set the location filter\n  venues                             Show map markers for the current filters\n  popup                              Show open venue popups\n  click <day> <n>                    Click the n-th event of the numbered day\n  marker <name...>                   Click a venue marker\n  close                              Close the popup and clear the focused event\n  ready                              Signal that the map has finished loading\n  map                                Show the map camera\n  load <path>                        Load a schedule JSON file\n  quit|exit                          Exit"
    );
}

fn print_events(view: &ScheduleView<TerminalMap>) {
    let data = view.data();
    println!("{} - {}", data.event_name, data.tagline);
    for day in view.event_rows() {
        match &day.date_range {
            Some(range) => println!("\nDay {}: {} ({})", day.day + 1, day.label, range),
            None => println!("\nDay {}: {}", day.day + 1, day.label),
        }
        let rows: Vec<Vec<String>> = day
            .events
            .iter()
            .map(|row| {
                let marker = if row.highlighted { "*" } else { "" };
                vec![
                    format!("{}{}", row.index + 1, marker),
                    row.name.clone(),
                    row.time.clone(),
                    row.venue.clone(),
                    if row.actionable { "yes" } else { "no" }.to_string(),
                ]
            })
            .collect();
        print!(
            "{}",
            render_text_table(&["#", "Event", "Time", "Venue", "Clickable"], &rows)
        );
    }
}

fn print_venues(view: &ScheduleView<TerminalMap>) {
    let markers = view.markers();
    if markers.is_empty() {
        println!("No venues match the current filters.");
        return;
    }
    let rows: Vec<Vec<String>> = markers
        .iter()
        .map(|marker| {
            vec![
                marker.venue.venue_name.clone(),
                format!("{:.4}", marker.venue.location.lat),
                format!("{:.4}", marker.venue.location.lng),
                marker.venue.events.len().to_string(),
                marker.visible.to_string(),
                marker.popup_open.to_string(),
            ]
        })
        .collect();
    print!(
        "{}",
        render_text_table(&["Venue", "Lat", "Lng", "Events", "Visible", "Popup"], &rows)
    );
}

fn print_popups(view: &ScheduleView<TerminalMap>) {
    let open: Vec<_> = view
        .markers()
        .into_iter()
        .filter(|marker| marker.popup_open)
        .collect();
    if open.is_empty() {
        println!("No popup open.");
        return;
    }
    for marker in open {
        println!("[{}]", marker.venue.venue_name);
        for date in marker.venue.dates() {
            println!("  {}", format_popup_date(date));
            for event in marker.venue.events_on(date) {
                println!("    {} (Time: {})", event.name, event.time);
            }
        }
    }
}

fn print_filters(view: &ScheduleView<TerminalMap>) {
    let filter = view.filter();
    let date = filter
        .date
        .map(format_option_date)
        .unwrap_or_else(|| "All Dates".to_string());
    let location = filter.location.as_deref().unwrap_or("All Locations");
    println!("Filters: {} / {}", date, location);
}

fn parse_date(input: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()
}

fn main() {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            process::exit(1);
        }
    };
    telemetry::init_tracing(config.log_level);

    let data = match load_configured_schedule(&config) {
        Ok(data) => data,
        Err(e) => {
            eprintln!("Error loading schedule: {}", e);
            process::exit(1);
        }
    };
    let table = match load_configured_venues(&config) {
        Ok(table) => table,
        Err(e) => {
            eprintln!("Error loading venue table: {}", e);
            process::exit(1);
        }
    };
    let mut view: ScheduleView<TerminalMap> = ScheduleView::new(data, table);

    println!("Festival Map (CLI) - type 'help' for commands\n");
    print_events(&view);

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();
        line.clear();
        match stdin.read_line(&mut line) {
            Ok(0) | Err(_) => break,
            Ok(_) => {}
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let mut parts = input.split_whitespace();
        let cmd = parts.next().unwrap_or("");

        match cmd {
            "help" => print_help(),
            "quit" | "exit" => break,
            "show" => {
                print_filters(&view);
                print_events(&view);
            }
            "dates" => {
                for date in view.date_options() {
                    println!("  {}  {}", date, format_option_date(date));
                }
            }
            "locations" => {
                for name in view.location_options() {
                    println!("  {}", name);
                }
            }
            "date" => match parts.next() {
                Some("all") => {
                    view.set_date_filter(None);
                    print_filters(&view);
                }
                Some(date_s) => match parse_date(date_s) {
                    Some(date) if view.date_options().contains(&date) => {
                        view.set_date_filter(Some(date));
                        print_filters(&view);
                    }
                    Some(date) => println!("No events scheduled on {}.", date),
                    None => println!("Invalid date (YYYY-MM-DD)"),
                },
                None => println!("Usage: date <YYYY-MM-DD|all>"),
            },
            "location" => {
                let name = parts.collect::<Vec<_>>().join(" ");
                if name.is_empty() {
                    println!("Usage: location <name...|all>");
                } else if name == "all" {
                    view.set_location_filter(None);
                    print_filters(&view);
                } else if view.location_options().contains(&name) {
                    view.set_location_filter(Some(name));
                    print_filters(&view);
                } else {
                    println!("Unknown location '{}'. Use 'locations' to list options.", name);
                }
            }
            "venues" => print_venues(&view),
            "popup" => print_popups(&view),
            "click" => {
                let day_s = parts.next();
                let n_s = parts.next();
                match (day_s, n_s) {
                    (Some(day_s), Some(n_s)) => {
                        let day = match day_s.parse::<usize>() {
                            Ok(n) if n >= 1 => n - 1,
                            _ => {
                                println!("Invalid day number");
                                continue;
                            }
                        };
                        let index = match n_s.parse::<usize>() {
                            Ok(n) if n >= 1 => n - 1,
                            _ => {
                                println!("Invalid event number");
                                continue;
                            }
                        };
                        match view.click_event(day, index) {
                            ClickOutcome::Focused { .. } => {
                                if let Some(selected) = view.selected() {
                                    println!(
                                        "Focused '{}' at {}.",
                                        selected.event.name,
                                        selected.event.venue.display()
                                    );
                                }
                            }
                            ClickOutcome::NotActionable => {
                                println!("That event has no announced venue or time yet.")
                            }
                            ClickOutcome::NotFound => {
                                println!("No event {} on day {}.", index + 1, day + 1)
                            }
                        }
                    }
                    _ => println!("Usage: click <day> <n>"),
                }
            }
            "marker" => {
                let name = parts.collect::<Vec<_>>().join(" ");
                if name.is_empty() {
                    println!("Usage: marker <name...>");
                    continue;
                }
                match view.click_marker(&name) {
                    Some(true) => {}
                    Some(false) => println!("Map is not ready yet."),
                    None => println!("No marker for '{}' under the current filters.", name),
                }
            }
            "close" => {
                view.close_popup();
                println!("Selection cleared.");
            }
            "ready" => {
                if view.map_ready(TerminalMap::default()) {
                    println!("Map ready.");
                } else {
                    println!("Map was already ready.");
                }
            }
            "map" => match view.map() {
                Some(map) => println!(
                    "Map center {:.4}, {:.4} zoom {}",
                    map.center.lat, map.center.lng, map.zoom
                ),
                None => println!("Map is not ready yet."),
            },
            "load" => {
                let path = input[cmd.len()..].trim();
                if path.is_empty() {
                    println!("Usage: load <path>");
                    continue;
                }
                match load_schedule_from_json(path) {
                    Ok(loaded) => {
                        let cleared = view.reload(loaded);
                        println!("Schedule loaded from {}.", path);
                        if cleared {
                            println!("Filters not present in the new schedule were cleared.");
                            print_filters(&view);
                        }
                        print_events(&view);
                    }
                    Err(e) => println!("Error loading schedule: {}", e),
                }
            }
            _ => {
                println!("Unknown command. Type 'help'.");
            }
        }
    }
}

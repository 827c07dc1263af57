use anyhow::Result;
use todolist::config::Config;
use todolist::logger;
use todolist::{Item, ItemList};

fn main() -> Result<()> {
    let config = Config::load()?;
    logger::init(&config.logging, None)?;

    let mut args = std::env::args().skip(1);
    let Some(title) = args.next() else {
        eprintln!("Usage: todolist <list title> [item]... ");
        eprintln!("\nPrefix an item with '+' to mark it done, e.g. todolist \"Today's Todos\" \"Buy milk\" \"+Clean room\"");
        return Ok(());
    };

    let mut list = ItemList::new(title);
    for arg in args {
        match arg.strip_prefix('+') {
            Some(done_title) => {
                let mut item = Item::new(done_title);
                item.mark_done();
                list.add(item);
            }
            None => {
                list.add(Item::new(arg));
            }
        }
    }

    println!("{}", list.render_with(&config.display.icons(), &config.display.header_decoration));
    Ok(())
}

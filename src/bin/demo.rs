use clap::Parser;
use seqds::{DoublyLinkedList, DynamicArray};

/// Walks both containers through a scripted sequence of operations and
/// prints each intermediate state.
#[derive(Parser, Debug)]
#[command(about = "Dynamic array and doubly linked list demo")]
struct CmdOptions {
    /// Initial capacity of the demo array; small values make grow/shrink visible
    #[arg(long, default_value_t = 4)]
    initial_capacity: usize,
    /// Skip the dynamic array part
    #[arg(long)]
    skip_array: bool,
    /// Skip the linked list part
    #[arg(long)]
    skip_list: bool,
}

fn array_demo(initial_capacity: usize) -> seqds::Result<DynamicArray<usize>> {
    println!("=== DynamicArray ===");
    let mut arr = DynamicArray::with_capacity(initial_capacity)?;
    println!("Initial capacity: {}", arr.capacity());
    println!("Initial size: {}", arr.len());

    for i in 1..=initial_capacity {
        arr.add(i);
    }
    println!("After {} adds: {arr}", arr.len());
    println!("Capacity: {}", arr.capacity());

    arr.add(initial_capacity.saturating_add(1));
    println!("Added one more element: {arr}");
    println!("Capacity after grow: {}", arr.capacity());

    for _ in 0..3 {
        arr.pop();
    }
    println!("After popping 3 times: {arr}");
    println!("Capacity after shrink check: {}", arr.capacity());

    let at = 1.min(arr.len());
    arr.insert(at, 99)?;
    println!("After insert at index {at}: {arr}");

    let removed = arr.delete_at(0)?;
    println!("After deleting index 0 ({removed}): {arr}");

    println!("Final size: {}", arr.len());
    println!("Final capacity: {}", arr.capacity());
    Ok(arr)
}

fn list_demo() -> seqds::Result<()> {
    println!("=== DoublyLinkedList ===");
    let mut list = DoublyLinkedList::new();
    list.add_first(10);
    list.add_last(20);
    list.add_at(15, 1)?;
    list.add_last(25);
    list.add_first(5);
    println!("List after adds: {list}");

    println!("Element at index 2: {}", list.get(2)?);
    list.set(17, 2)?;
    println!("After setting index 2 to 17: {list}");

    println!("Contains 20? {}", list.contains(&20));
    match list.index_of(&25) {
        Some(ix) => println!("Index of 25: {ix}"),
        None => println!("Index of 25: not found"),
    }

    list.remove_first();
    println!("After remove_first(): {list}");
    list.remove_last();
    println!("After remove_last(): {list}");
    list.remove_at(1)?;
    println!("After remove_at(1): {list}");

    list.reverse();
    println!("After reverse(): {list}");

    list.extend([12, 3, 30]);
    println!("Before sort: {list}");
    list.sort();
    println!("After sort: {list}");

    list.clear();
    println!("After clear(): {list}");
    println!("Is empty? {}", list.is_empty());
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let options = CmdOptions::parse();
    log::info!("Starting demo with {options:?}");

    if !options.skip_array {
        if let Err(err) = array_demo(options.initial_capacity) {
            log::error!("Array demo failed: {err}");
            std::process::exit(1);
        }
    }
    if !options.skip_list {
        if let Err(err) = list_demo() {
            log::error!("List demo failed: {err}");
            std::process::exit(1);
        }
    }
}

use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use library_system::books::domain::model::BookEntity;
use library_system::catalog::domain::LibraryService;
use library_system::catalog::factory::create_library_service;
use library_system::core::domain::Configuration;
use library_system::core::library::LibraryResult;
use library_system::gateway::TransactionSinkVia;
use library_system::utils::trace::setup_tracing;

#[tokio::main]
async fn main() -> LibraryResult<()> {
    setup_tracing();

    let library = create_library_service(&Configuration::new(), TransactionSinkVia::Console);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        println!("\n=== Welcome to the Library System ===");
        println!("1. Add a New Book");
        println!("2. Show All Books");
        println!("3. Borrow a Book");
        println!("4. Return a Book");
        println!("5. Exit");

        let Some(line) = prompt(&mut lines, "Please choose an option: ").await? else {
            break;
        };
        let choice: u32 = match line.trim().parse() {
            Ok(choice) => choice,
            Err(_) => {
                println!("Error: Please enter a valid number.");
                continue;
            }
        };

        match choice {
            1 => add_book(library.as_ref(), &mut lines).await?,
            2 => {
                for book in library.list_books().await? {
                    println!("{}", book);
                }
            }
            3 => {
                let Some(id) = prompt(&mut lines, "Enter Book ID to borrow: ").await? else {
                    break;
                };
                match library.borrow_book(id.trim()).await {
                    Ok(_) => println!("Book borrowed successfully."),
                    Err(err) => println!("Error: {}", err),
                }
            }
            4 => {
                let Some(id) = prompt(&mut lines, "Enter Book ID to return: ").await? else {
                    break;
                };
                match library.return_book(id.trim()).await {
                    Ok(_) => println!("Book returned successfully."),
                    Err(err) => println!("Error: {}", err),
                }
            }
            5 => {
                println!("Thank you for using the Library System.");
                break;
            }
            _ => println!("Invalid option, please try again."),
        }
    }

    // Drains any entries still queued in the transaction log.
    library.shutdown().await
}

async fn add_book(library: &dyn LibraryService, lines: &mut Lines<BufReader<Stdin>>) -> LibraryResult<()> {
    let Some(id) = prompt(lines, "Enter Book ID: ").await? else { return Ok(()) };
    let Some(title) = prompt(lines, "Enter Title: ").await? else { return Ok(()) };
    let Some(author) = prompt(lines, "Enter Author: ").await? else { return Ok(()) };
    let Some(year) = prompt(lines, "Enter Publication Year: ").await? else { return Ok(()) };
    let year: i32 = match year.trim().parse() {
        Ok(year) => year,
        Err(_) => {
            println!("Error: Please enter a valid number.");
            return Ok(());
        }
    };

    let book = BookEntity::new(id.trim(), title.trim(), author.trim(), year);
    match library.add_book(&book).await {
        Ok(()) => println!("Book added successfully."),
        Err(err) => println!("Error: {}", err),
    }
    Ok(())
}

async fn prompt(lines: &mut Lines<BufReader<Stdin>>, message: &str) -> LibraryResult<Option<String>> {
    print!("{}", message);
    std::io::stdout().flush()?;
    Ok(lines.next_line().await?)
}

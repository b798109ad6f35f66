//! The line oriented commands of the `inventory` binary.

use std::io::{self, Write};

use crate::catalog::Catalog;

const RULE: &str = "----------------------------------------";

pub const FIND_USAGE: &str = "USAGE: find <UNIQUE I.D.>";
pub const LIST_USAGE: &str = "USAGE: listInventory <CATEGORY>";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `find <id>`
    Find(String),
    /// `listInventory <category>`, the category may contain spaces
    List(String),
    Help,
    Exit,
    /// Blank input line
    Empty,
    /// A known command with its argument missing
    Usage(&'static str),
    Unknown(String),
}

impl Command {
    pub fn parse(line: &str) -> Self {
        let line = line.trim_end_matches(['\r', '\n']).trim_start();
        let (cmd, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

        match cmd {
            "find" => match rest.split_whitespace().next() {
                Some(id) => Self::Find(id.to_string()),
                None => Self::Usage(FIND_USAGE),
            },
            "listInventory" => {
                let category = rest.trim_start_matches([' ', '\t']);
                if category.is_empty() {
                    Self::Usage(LIST_USAGE)
                } else {
                    Self::List(category.to_string())
                }
            }
            "help" => Self::Help,
            "exit" => Self::Exit,
            "" => Self::Empty,
            other => Self::Unknown(other.to_string()),
        }
    }
}

pub fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "ALL AVAILABLE COMMANDS:")?;
    writeln!(out, "  find <UNIQUE I.D.>        - FINDS THE PRODUCT GIVEN THE UNIQUE I.D.")?;
    writeln!(out, "  listInventory <CATEGORY>  - LISTS ALL THE PRODUCTS IN THE CATEGORY")?;
    writeln!(out, "  help                      - SHOWS THIS PAGE")?;
    writeln!(out, "  exit                      - EXITS THE APPLICATION")?;
    writeln!(out)
}

/// Runs `command` against `catalog`, writing what the user sees to `out`.
pub fn execute<W: Write>(catalog: &Catalog, command: &Command, out: &mut W) -> io::Result<()> {
    match command {
        Command::Find(id) => match catalog.find_product(id) {
            Some(product) => {
                writeln!(out)?;
                writeln!(out, "PRODUCT FOUND :")?;
                writeln!(out, "{RULE}")?;
                write!(out, "{product}")?;
                writeln!(out, "{RULE}")
            }
            None => writeln!(out, "PRODUCT NOT FOUND"),
        },
        Command::List(category) => {
            if !catalog.category_exists(category) {
                return writeln!(out, "INVALID");
            }

            let products = catalog.list_by_category(category);
            writeln!(out)?;
            writeln!(out, "PRODUCTS IN CATEGORY '{category}':")?;
            writeln!(out, "{RULE}")?;
            for p in &products {
                writeln!(out, "UNIQUE I.D.: {} | PRODUCT NAME: {}", p.uniq_id(), p.name())?;
            }
            writeln!(out, "TOTAL: {} PRODUCTS", products.len())?;
            writeln!(out, "{RULE}")
        }
        Command::Help => print_help(out),
        Command::Exit => writeln!(out, "EXITING..."),
        Command::Empty => Ok(()),
        Command::Usage(usage) => writeln!(out, "{usage}"),
        Command::Unknown(cmd) => {
            writeln!(out, "UNKNOWN COMMAND: {cmd}")?;
            writeln!(out, "TYPE 'help' FOR AVAILABLE COMMANDS")
        }
    }
}

#[cfg(test)]
mod test {
    use super::{Command, FIND_USAGE, LIST_USAGE, execute};
    use crate::{catalog::Catalog, product::Product};

    #[test]
    fn parse() {
        assert_eq!(Command::parse("find abc\n"), Command::Find("abc".into()));
        assert_eq!(Command::parse("  find   abc extra"), Command::Find("abc".into()));
        assert_eq!(Command::parse("find"), Command::Usage(FIND_USAGE));
        assert_eq!(Command::parse("find   \r\n"), Command::Usage(FIND_USAGE));
        assert_eq!(
            Command::parse("listInventory   Toys & Games\r\n"),
            Command::List("Toys & Games".into())
        );
        assert_eq!(Command::parse("listInventory"), Command::Usage(LIST_USAGE));
        assert_eq!(Command::parse("help"), Command::Help);
        assert_eq!(Command::parse("exit\n"), Command::Exit);
        assert_eq!(Command::parse("   \n"), Command::Empty);
        assert_eq!(Command::parse("dance now"), Command::Unknown("dance".into()));
    }

    fn run(catalog: &Catalog, line: &str) -> String {
        let mut out = Vec::new();
        execute(catalog, &Command::parse(line), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn execute_find_and_list() {
        let mut catalog = Catalog::new();
        catalog
            .add_product(Product::new("id1", "Mouse", "Logi", "$29.99", "Electronics | Mice"))
            .unwrap();
        catalog
            .add_product(Product::new("id2", "Keyboard", "Logi", "$49.99", "Electronics"))
            .unwrap();

        let found = run(&catalog, "find id1");
        assert!(found.contains("PRODUCT FOUND :"));
        assert!(found.contains("PRODUCT NAME: Mouse\n"));

        assert_eq!(run(&catalog, "find id3"), "PRODUCT NOT FOUND\n");
        assert_eq!(run(&catalog, "listInventory Books"), "INVALID\n");

        let listing = run(&catalog, "listInventory Electronics");
        assert!(listing.contains("PRODUCTS IN CATEGORY 'Electronics':"));
        let mouse = listing.find("UNIQUE I.D.: id1 | PRODUCT NAME: Mouse").unwrap();
        let keyboard = listing.find("UNIQUE I.D.: id2 | PRODUCT NAME: Keyboard").unwrap();
        assert!(mouse < keyboard);
        assert!(listing.contains("TOTAL: 2 PRODUCTS\n"));

        assert!(run(&catalog, "bogus").starts_with("UNKNOWN COMMAND: bogus\n"));
        assert_eq!(run(&catalog, ""), "");
        assert_eq!(run(&catalog, "exit"), "EXITING...\n");
    }
}

//! Writes `test_db.kdbx` (password `password`) for trying out the viewer.

use keepass::{config::DatabaseConfig, db::Group, db::Node, db::Value, Database, DatabaseKey};
use std::fs::File;

fn entry(title: &str, username: &str, password: &str, url: &str) -> Node {
    let mut entry = keepass::db::Entry::new();
    entry.fields.insert("Title".to_string(), Value::Unprotected(title.to_string()));
    entry.fields.insert("UserName".to_string(), Value::Unprotected(username.to_string()));
    entry.fields.insert("Password".to_string(), Value::Protected(password.as_bytes().into()));
    entry.fields.insert("URL".to_string(), Value::Unprotected(url.to_string()));
    Node::Entry(entry)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut db = Database::new(DatabaseConfig::default());
    db.meta.database_name = Some("Test DB".to_string());

    let mut banking = Group::new("Banking");
    banking.children.push(entry("Bank A", "u1", "p1", ""));
    banking.children.push(entry("Bank B", "u2", "correct horse", "https://bank-b.example"));

    let mut cards = Group::new("Cards");
    cards.children.push(entry("Visa", "card-holder", "1234", ""));
    banking.children.push(Node::Group(cards));

    let mut email = Group::new("Email");
    for i in 0..12 {
        email.children.push(entry(
            &format!("Mailbox {i}"),
            &format!("user{i}@mail.example"),
            "hunter2",
            "https://mail.example",
        ));
    }

    db.root.children.push(Node::Group(banking));
    db.root.children.push(Node::Group(email));
    db.root.children.push(Node::Group(Group::new("Recycle Bin")));

    let key = DatabaseKey::new().with_password("password");
    let mut file = File::create("test_db.kdbx")?;
    db.save(&mut file, key)?;

    println!("Created test_db.kdbx with password 'password'");
    Ok(())
}

use anyhow::Result;
use campus_core::error::CampusError;
use campus_core::pages::CommunityPage;
use owo_colors::OwoColorize;

use crate::render::Render;

pub fn run(text: &str) -> Result<()> {
    let mut page = CommunityPage::new();
    page.type_draft(text);
    let counter = page.counter().render();

    match page.create_post() {
        Ok(post) => {
            println!("{}", post.render());
            println!("   {}", counter);
            println!();
            println!("{}", "Post created successfully!".green());
        }
        Err(CampusError::EmptyPost) => {
            eprintln!("{}", CampusError::EmptyPost.to_string().red());
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}

//! Cross-reference checks applied to every loaded dataset.
//!
//! Rules:
//!
//! - topic slugs, usernames and article titles are unique
//! - every article names a known topic and a known author
//! - every comment names a known article title and a known author

use std::collections::HashSet;

use crate::dataset::SeedDataset;
use crate::error::DatasetError;

pub(crate) fn validate_dataset(dataset: &SeedDataset) -> Result<(), DatasetError> {
    let slugs = unique(dataset.topics().iter().map(|t| t.slug.as_str()), |slug| {
        DatasetError::DuplicateTopic {
            slug: slug.to_owned(),
        }
    })?;
    let usernames = unique(dataset.users().iter().map(|u| u.username.as_str()), |username| {
        DatasetError::DuplicateUser {
            username: username.to_owned(),
        }
    })?;
    let titles = unique(dataset.articles().iter().map(|a| a.title.as_str()), |title| {
        DatasetError::DuplicateArticle {
            title: title.to_owned(),
        }
    })?;

    for article in dataset.articles() {
        let owner = format!("article '{}'", article.title);
        if !slugs.contains(article.topic.as_str()) {
            return Err(DatasetError::UnknownTopic {
                owner,
                slug: article.topic.clone(),
            });
        }
        if !usernames.contains(article.created_by.as_str()) {
            return Err(DatasetError::UnknownUser {
                owner,
                username: article.created_by.clone(),
            });
        }
    }

    for (index, comment) in dataset.comments().iter().enumerate() {
        let owner = format!("comment {index}");
        if !titles.contains(comment.belongs_to.as_str()) {
            return Err(DatasetError::UnknownArticle {
                owner,
                title: comment.belongs_to.clone(),
            });
        }
        if !usernames.contains(comment.created_by.as_str()) {
            return Err(DatasetError::UnknownUser {
                owner,
                username: comment.created_by.clone(),
            });
        }
    }

    Ok(())
}

fn unique<'a, I, F>(values: I, duplicate: F) -> Result<HashSet<&'a str>, DatasetError>
where
    I: Iterator<Item = &'a str>,
    F: Fn(&str) -> DatasetError,
{
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(duplicate(value));
        }
    }
    Ok(seen)
}

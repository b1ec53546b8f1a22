//! Grouping raw job listings into per-company aggregates.

use std::collections::HashMap;

use leadscout_sources::JobListing;

/// All listings for one company, in the order the source returned them.
pub(crate) struct CompanyGroup {
    pub name: String,
    pub logo_url: String,
    pub titles: Vec<String>,
    pub urls: Vec<String>,
    pub descriptions: Vec<String>,
}

impl CompanyGroup {
    pub fn open_roles(&self) -> usize {
        self.titles.len()
    }

    /// Joined titles and descriptions, used as classifier input when news
    /// text is unavailable.
    pub fn aggregated_text(&self) -> String {
        let mut parts: Vec<&str> = self.titles.iter().map(String::as_str).collect();
        parts.extend(
            self.descriptions
                .iter()
                .map(String::as_str)
                .filter(|d| !d.trim().is_empty()),
        );
        parts.join(". ")
    }
}

/// Groups listings by exact company name, preserving first-seen company order.
pub(crate) fn group_by_company(listings: Vec<JobListing>) -> Vec<CompanyGroup> {
    let mut groups: Vec<CompanyGroup> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for listing in listings {
        let idx = match index.get(&listing.company_name) {
            Some(&idx) => idx,
            None => {
                index.insert(listing.company_name.clone(), groups.len());
                groups.push(CompanyGroup {
                    name: listing.company_name.clone(),
                    logo_url: listing.logo_url.clone(),
                    titles: Vec::new(),
                    urls: Vec::new(),
                    descriptions: Vec::new(),
                });
                groups.len() - 1
            }
        };

        let group = &mut groups[idx];
        if group.logo_url.is_empty() {
            group.logo_url = listing.logo_url;
        }
        group.titles.push(listing.title);
        group.urls.push(listing.url);
        group.descriptions.push(listing.description);
    }

    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(company: &str, title: &str) -> JobListing {
        JobListing {
            title: title.to_string(),
            company_name: company.to_string(),
            description: String::new(),
            url: format!("https://jobs.example.com/{title}"),
            logo_url: String::new(),
        }
    }

    #[test]
    fn groups_preserve_first_seen_order() {
        let groups = group_by_company(vec![
            listing("Beta", "dev"),
            listing("Acme", "ops"),
            listing("Beta", "data"),
        ]);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].name, "Beta");
        assert_eq!(groups[0].open_roles(), 2);
        assert_eq!(groups[0].titles, vec!["dev", "data"]);
        assert_eq!(groups[1].name, "Acme");
        assert_eq!(groups[1].open_roles(), 1);
    }

    #[test]
    fn aggregated_text_joins_titles_and_nonempty_descriptions() {
        let mut l1 = listing("Acme", "Backend Engineer");
        l1.description = "We ship fast".to_string();
        let l2 = listing("Acme", "Data Engineer");

        let groups = group_by_company(vec![l1, l2]);
        assert_eq!(
            groups[0].aggregated_text(),
            "Backend Engineer. Data Engineer. We ship fast"
        );
    }
}

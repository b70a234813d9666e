//! Text rendering of pages for the command line.

use std::fmt::{self, Write};

use clap::ValueEnum;

use crate::error::{Error, Result};
use crate::format::capitalize;
use crate::pages::{
    AdminPage, BlogCard, BlogDetailPage, BlogsPage, HomePage, JobCard, JobDetailPage, JobsPage,
    NotFoundPage, Page,
};

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// Formatted table
    Table,
    /// JSON output
    Json,
}

/// Render a page in the requested format.
///
/// Detail pages have no natural table form; `Table` renders them as
/// field/value rows.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn render(page: &Page, format: OutputFormat) -> Result<String> {
    let mut out = String::new();
    let written = match format {
        OutputFormat::Json => return Ok(serde_json::to_string_pretty(page)?),
        OutputFormat::Plain => plain(&mut out, page),
        OutputFormat::Table => table(&mut out, page),
    };
    written.map_err(|e| Error::internal(format!("failed to render page: {e}")))?;
    Ok(out)
}

fn plain(out: &mut String, page: &Page) -> fmt::Result {
    match page {
        Page::Home(home) => plain_home(out, home),
        Page::Jobs(jobs) => plain_jobs(out, jobs),
        Page::JobDetail(detail) => plain_job_detail(out, detail),
        Page::Blogs(blogs) => plain_blogs(out, blogs),
        Page::BlogDetail(detail) => plain_blog_detail(out, detail),
        Page::Admin(admin) => table_admin(out, admin),
        Page::NotFound(not_found) => plain_not_found(out, not_found),
    }
}

fn table(out: &mut String, page: &Page) -> fmt::Result {
    match page {
        Page::Home(home) => {
            heading(out, "Featured Jobs")?;
            job_table(out, &home.featured_jobs)?;
            writeln!(out)?;
            heading(out, "Latest Updates")?;
            blog_table(out, &home.latest_blogs)
        }
        Page::Jobs(jobs) => {
            writeln!(out, "{}", jobs.summary)?;
            writeln!(out)?;
            job_table(out, &jobs.jobs)
        }
        Page::Blogs(blogs) => blog_table(out, &blogs.blogs),
        Page::JobDetail(detail) => {
            let job = &detail.job;
            let mut rows = vec![
                vec!["Title".to_string(), job.title.clone()],
                vec!["Department".to_string(), job.department.clone()],
                vec!["Location".to_string(), job.location.clone()],
                vec!["Category".to_string(), job.category.label().to_string()],
                vec!["Type".to_string(), capitalize(&job.job_type.to_string())],
                vec!["Status".to_string(), capitalize(&job.status.to_string())],
                vec!["Vacancies".to_string(), job.vacancies.to_string()],
                vec!["Salary".to_string(), job.salary.clone()],
                vec!["Age Limit".to_string(), job.age_limit.clone()],
                vec!["Posted".to_string(), detail.posted_date.clone()],
                vec!["Last Date".to_string(), detail.last_date.clone()],
            ];
            rows.extend(
                detail
                    .fees
                    .iter()
                    .map(|f| vec![format!("Fee ({})", f.category), f.fee.clone()]),
            );
            rows.push(vec!["Apply".to_string(), job.apply_link.clone()]);
            grid(out, &["FIELD", "VALUE"], &rows)
        }
        Page::BlogDetail(detail) => {
            let blog = &detail.blog;
            let rows = vec![
                vec!["Title".to_string(), blog.title.clone()],
                vec!["Author".to_string(), blog.author.clone()],
                vec!["Category".to_string(), blog.category.clone()],
                vec!["Published".to_string(), detail.published_date.clone()],
                vec!["Read Time".to_string(), format!("{} min", blog.read_time)],
                vec!["Tags".to_string(), blog.tags.join(", ")],
            ];
            grid(out, &["FIELD", "VALUE"], &rows)
        }
        Page::Admin(admin) => table_admin(out, admin),
        Page::NotFound(not_found) => plain_not_found(out, not_found),
    }
}

fn heading(out: &mut String, title: &str) -> fmt::Result {
    writeln!(out, "{title}")?;
    writeln!(out, "{}", "=".repeat(title.chars().count()))
}

fn plain_home(out: &mut String, home: &HomePage) -> fmt::Result {
    heading(out, &home.site_name)?;
    writeln!(out, "Find Your Dream Government Job")?;
    writeln!(out)?;

    let popular: Vec<String> = home
        .popular_searches
        .iter()
        .map(|l| format!("{} ({})", l.name, l.path))
        .collect();
    writeln!(out, "Popular Searches: {}", popular.join(", "))?;
    writeln!(out)?;

    writeln!(out, "Browse by Category")?;
    for tile in &home.categories {
        writeln!(out, "  {:<20} {:>3} jobs  {}", tile.name, tile.count, tile.path)?;
    }
    writeln!(out)?;

    writeln!(out, "Featured Jobs")?;
    for job in &home.featured_jobs {
        job_card(out, job)?;
    }
    writeln!(out)?;

    writeln!(out, "Latest Updates")?;
    for blog in &home.latest_blogs {
        blog_card(out, blog)?;
    }
    Ok(())
}

fn plain_jobs(out: &mut String, page: &JobsPage) -> fmt::Result {
    if let Some(term) = &page.filter.search {
        writeln!(out, "Search: {term}")?;
    }
    if !page.applied.is_empty() {
        let applied: Vec<String> = page
            .applied
            .iter()
            .map(|a| format!("{}: {}", a.label, a.value))
            .collect();
        writeln!(out, "Applied Filters: {}", applied.join(", "))?;
    }
    writeln!(out, "{}", page.summary)?;
    writeln!(out)?;

    if let Some(empty) = page.empty {
        writeln!(out, "{}", empty.heading)?;
        return writeln!(out, "{}", empty.message);
    }
    for job in &page.jobs {
        job_card(out, job)?;
    }
    Ok(())
}

fn job_card(out: &mut String, job: &JobCard) -> fmt::Result {
    writeln!(out, "  [{}] {}", job.id, job.title)?;
    writeln!(out, "      {} | {}", job.department, job.location)?;
    writeln!(
        out,
        "      {} | {} vacancies | Last Date: {} | Posted {}",
        capitalize(&job.status.to_string()),
        job.vacancies,
        job.last_date,
        job.posted_ago
    )?;
    if !job.qualifications.is_empty() {
        let more = if job.more_qualifications {
            ", and more..."
        } else {
            ""
        };
        writeln!(out, "      Qualifications: {}{more}", job.qualifications.join(", "))?;
    }
    Ok(())
}

fn plain_job_detail(out: &mut String, page: &JobDetailPage) -> fmt::Result {
    let job = &page.job;
    heading(out, &job.title)?;
    writeln!(
        out,
        "{} | {} | {}",
        job.category.to_string().to_uppercase(),
        capitalize(&job.status.to_string()),
        capitalize(&job.job_type.to_string())
    )?;
    writeln!(out, "Department:  {}", job.department)?;
    writeln!(out, "Location:    {}", job.location)?;
    writeln!(out, "Salary:      {}", job.salary)?;
    writeln!(out, "Vacancies:   {}", job.vacancies)?;
    writeln!(out, "Age Limit:   {}", job.age_limit)?;
    writeln!(out, "Posted:      {}", page.posted_date)?;
    writeln!(out, "Last Date:   {}", page.last_date)?;
    writeln!(out)?;

    writeln!(out, "{}", job.description)?;
    writeln!(out)?;

    writeln!(out, "Qualifications")?;
    for q in &job.qualifications {
        writeln!(out, "  - {q}")?;
    }
    if !job.selection_process.is_empty() {
        writeln!(out, "Selection Process")?;
        for (i, step) in job.selection_process.iter().enumerate() {
            writeln!(out, "  {}. {step}", i + 1)?;
        }
    }
    writeln!(out, "Application Fee")?;
    for fee in &page.fees {
        writeln!(out, "  {:<8} {}", fee.category, fee.fee)?;
    }
    writeln!(out, "Important Dates")?;
    for row in &page.important_dates {
        writeln!(out, "  {:<18} {}", row.label, row.date)?;
    }
    writeln!(out)?;
    writeln!(out, "Apply: {}", job.apply_link)?;

    if !page.similar_jobs.is_empty() {
        writeln!(out)?;
        writeln!(out, "Similar Jobs")?;
        for similar in &page.similar_jobs {
            writeln!(out, "  [{}] {} ({})", similar.id, similar.title, similar.department)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Share")?;
    writeln!(out, "  Facebook: {}", page.share.facebook)?;
    writeln!(out, "  Twitter:  {}", page.share.twitter)?;
    writeln!(out, "  LinkedIn: {}", page.share.linkedin)
}

fn plain_blogs(out: &mut String, page: &BlogsPage) -> fmt::Result {
    let categories = page.facets.category_names();
    writeln!(out, "Categories: {}", categories.join(", "))?;
    if let Some(term) = &page.filter.search {
        writeln!(out, "Search: {term}")?;
    }
    if let Some(category) = &page.filter.category {
        writeln!(out, "Category: {category}")?;
    }
    if let Some(tag) = &page.filter.tag {
        writeln!(out, "Tag: {tag}")?;
    }
    writeln!(out)?;

    if let Some(empty) = page.empty {
        writeln!(out, "{}", empty.heading)?;
        return writeln!(out, "{}", empty.message);
    }
    for blog in &page.blogs {
        blog_card(out, blog)?;
    }
    Ok(())
}

fn blog_card(out: &mut String, blog: &BlogCard) -> fmt::Result {
    writeln!(out, "  [{}] {}", blog.id, blog.title)?;
    writeln!(
        out,
        "      {} | {} | {} | {} min read",
        blog.category, blog.author, blog.published, blog.read_time
    )?;
    writeln!(out, "      {}", blog.excerpt)?;
    if !blog.tags.is_empty() {
        writeln!(out, "      Tags: {}", blog.tags.join(", "))?;
    }
    Ok(())
}

fn plain_blog_detail(out: &mut String, page: &BlogDetailPage) -> fmt::Result {
    let blog = &page.blog;
    heading(out, &blog.title)?;
    writeln!(
        out,
        "{} | {} | {} | {} min read",
        blog.category, blog.author, page.published_date, blog.read_time
    )?;
    writeln!(out)?;
    writeln!(out, "{}", blog.content.trim_end())?;
    writeln!(out)?;

    let tags: Vec<String> = page
        .tag_links
        .iter()
        .map(|t| format!("{} ({})", t.name, t.path))
        .collect();
    writeln!(out, "Tags: {}", tags.join(", "))?;

    if !page.related.is_empty() {
        writeln!(out)?;
        writeln!(out, "Related Articles")?;
        for related in &page.related {
            writeln!(
                out,
                "  [{}] {} ({}, {} min read)",
                related.id, related.title, related.published, related.read_time
            )?;
        }
    }

    writeln!(out)?;
    writeln!(out, "Categories")?;
    for category in &page.categories {
        writeln!(out, "  {} ({})", category.name, category.count)?;
    }

    writeln!(out)?;
    writeln!(out, "Share")?;
    writeln!(out, "  Facebook: {}", page.share.facebook)?;
    writeln!(out, "  Twitter:  {}", page.share.twitter)?;
    writeln!(out, "  LinkedIn: {}", page.share.linkedin)
}

fn plain_not_found(out: &mut String, page: &NotFoundPage) -> fmt::Result {
    if let Some(path) = &page.requested {
        writeln!(out, "404: {path}")?;
    }
    writeln!(out, "{}", page.heading)?;
    writeln!(out, "{}", page.message)?;
    writeln!(out, "{}: {}", page.back_label, page.back_path)
}

fn table_admin(out: &mut String, page: &AdminPage) -> fmt::Result {
    heading(out, "Job Listings")?;
    let rows: Vec<Vec<String>> = page
        .jobs
        .iter()
        .map(|j| {
            vec![
                j.id.clone(),
                j.title.clone(),
                j.department.clone(),
                j.location.clone(),
                j.last_date.clone(),
                capitalize(&j.status.to_string()),
            ]
        })
        .collect();
    grid(
        out,
        &["ID", "JOB TITLE", "DEPARTMENT", "LOCATION", "LAST DATE", "STATUS"],
        &rows,
    )?;
    writeln!(out)?;

    heading(out, "Blog Posts")?;
    let rows: Vec<Vec<String>> = page
        .blogs
        .iter()
        .map(|b| {
            vec![
                b.id.clone(),
                b.title.clone(),
                b.author.clone(),
                b.category.clone(),
                b.published.clone(),
            ]
        })
        .collect();
    grid(out, &["ID", "TITLE", "AUTHOR", "CATEGORY", "PUBLISHED"], &rows)
}

fn job_table(out: &mut String, jobs: &[JobCard]) -> fmt::Result {
    let rows: Vec<Vec<String>> = jobs
        .iter()
        .map(|j| {
            vec![
                j.id.clone(),
                j.title.clone(),
                j.department.clone(),
                j.location.clone(),
                capitalize(&j.status.to_string()),
                j.last_date.clone(),
            ]
        })
        .collect();
    grid(
        out,
        &["ID", "TITLE", "DEPARTMENT", "LOCATION", "STATUS", "LAST DATE"],
        &rows,
    )
}

fn blog_table(out: &mut String, blogs: &[BlogCard]) -> fmt::Result {
    let rows: Vec<Vec<String>> = blogs
        .iter()
        .map(|b| {
            vec![
                b.id.clone(),
                b.title.clone(),
                b.category.clone(),
                b.published.clone(),
                format!("{} min", b.read_time),
            ]
        })
        .collect();
    grid(out, &["ID", "TITLE", "CATEGORY", "PUBLISHED", "READ"], &rows)
}

/// Left-aligned columns separated by two spaces. Widths count chars so
/// rupee signs and other non-ASCII text line up.
fn grid(out: &mut String, headers: &[&str], rows: &[Vec<String>]) -> fmt::Result {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    writeln!(out, "{}", grid_line(headers.iter().copied(), &widths))?;
    for row in rows {
        writeln!(out, "{}", grid_line(row.iter().map(String::as_str), &widths))?;
    }
    Ok(())
}

fn grid_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .zip(widths)
        .map(|(cell, width)| format!("{cell:<width$}"))
        .collect();
    padded.join("  ").trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pages::tests::{bundled, today};
    use crate::pages::PageContext;
    use crate::route::Route;

    fn page(path: &str) -> Page {
        let (catalog, config) = bundled();
        let ctx = PageContext::new(&catalog, &config, today());
        Page::for_route(&ctx, &Route::parse(path).unwrap()).unwrap()
    }

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Plain);
    }

    #[test]
    fn test_plain_jobs_summary() {
        let text = render(&page("/jobs?category=banking"), OutputFormat::Plain).unwrap();
        assert!(text.contains("Applied Filters: Category: banking"));
        assert!(text.contains("Showing 2 jobs matching your criteria"));
        assert!(text.contains("[3] Probationary Officer"));
        assert!(!text.contains("[1] "));
    }

    #[test]
    fn test_plain_empty_listing() {
        let text = render(&page("/blogs?search=zzzz"), OutputFormat::Plain).unwrap();
        assert!(text.contains("No articles found"));
    }

    #[test]
    fn test_table_columns_align() {
        let text = render(&page("/jobs?category=defence"), OutputFormat::Table).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        let header = lines.iter().position(|l| l.starts_with("ID")).unwrap();
        let title_col = lines[header].find("TITLE").unwrap();

        let row = lines[header + 1];
        assert!(row.starts_with("9 "));
        assert_eq!(&row[title_col..title_col + 8], "Agniveer");
    }

    #[test]
    fn test_detail_table_lists_fees() {
        let text = render(&page("/jobs/1"), OutputFormat::Table).unwrap();
        assert!(text.starts_with("FIELD"));
        assert!(text.contains("Fee (General)"));
        assert!(text.contains("Fee (PwD)"));
    }

    #[test]
    fn test_json_round_trips_through_value() {
        let text = render(&page("/blogs/1"), OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["page"], "blogDetail");
        assert_eq!(value["blog"]["slug"], "prepare-for-upsc-civil-services-examination");
    }

    #[test]
    fn test_not_found_plain() {
        let text = render(&page("/jobs/999"), OutputFormat::Plain).unwrap();
        assert!(text.contains("Job Not Found"));
        assert!(text.contains("Back to Jobs: /jobs"));
    }
}

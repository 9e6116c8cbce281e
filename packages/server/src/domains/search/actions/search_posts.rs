//! Instagram posts for a location.

use super::fanout::run_provider;
use crate::domains::search::models::{PostsResult, Provider, SearchQuery};
use crate::domains::search::ranking::rank_posts;
use crate::kernel::{PostBatch, ServerDeps};

fn batch_len(batch: &PostBatch) -> usize {
    batch.posts.len()
}

/// Fetch up to `deps.post_limit` posts, most liked first.
pub async fn search_posts(deps: &ServerDeps, query: &SearchQuery) -> PostsResult {
    let location = query.location();

    let instagram = run_provider(
        Provider::Instagram,
        deps.timeouts.instagram,
        deps.instagram
            .as_ref()
            .map(|p| p.fetch_posts(location, deps.post_limit)),
        batch_len,
    )
    .await;

    let PostBatch {
        mut posts,
        warnings: tag_warnings,
    } = instagram.value;
    rank_posts(&mut posts);

    tracing::info!(location, posts = posts.len(), "Posts search complete");

    let warnings = instagram.warning.into_iter().chain(tag_warnings).collect();
    PostsResult::new(query, posts, vec![instagram.report], warnings)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::search::models::{PostCategory, SearchCategory, SourceStatus};
    use crate::kernel::test_dependencies::sample_post;
    use crate::kernel::{MockPostProvider, ProviderError, TestDependencies};

    fn query() -> SearchQuery {
        SearchQuery::new("Seattle", SearchCategory::All).unwrap()
    }

    #[tokio::test]
    async fn test_posts_sorted_by_likes_and_limit_passed() {
        let mut test_deps = TestDependencies::new().mock_instagram(MockPostProvider::new().with_posts(vec![
            sample_post("a", 10, PostCategory::Eat),
            sample_post("b", 300, PostCategory::Do),
            sample_post("c", 45, PostCategory::Sleep),
        ]));
        test_deps.post_limit = 9;

        let result = search_posts(&test_deps.to_server_deps(), &query()).await;

        let codes: Vec<_> = result.posts().iter().map(|p| p.shortcode()).collect();
        assert_eq!(codes, vec!["b", "c", "a"]);
        assert_eq!(result.sources()[0].count, 3);

        let calls = test_deps.instagram.as_ref().unwrap().calls();
        assert_eq!(calls[0].query, "Seattle");
        assert_eq!(calls[0].limit, 9);
    }

    #[tokio::test]
    async fn test_hashtag_notes_become_warnings() {
        let test_deps = TestDependencies::new().mock_instagram(
            MockPostProvider::new()
                .with_posts(vec![sample_post("a", 1, PostCategory::Eat)])
                .with_warnings(vec!["No Instagram results for #seattlehotel".to_string()]),
        );

        let result = search_posts(&test_deps.to_server_deps(), &query()).await;

        assert_eq!(result.posts().len(), 1);
        assert_eq!(result.sources()[0].status, SourceStatus::Ok);
        assert_eq!(
            result.warnings(),
            ["No Instagram results for #seattlehotel".to_string()]
        );
    }

    #[tokio::test]
    async fn test_unavailable_instagram_is_empty() {
        let test_deps = TestDependencies::new().mock_instagram(
            MockPostProvider::new()
                .failing_with(ProviderError::unavailable(Provider::Instagram, "login required")),
        );

        let result = search_posts(&test_deps.to_server_deps(), &query()).await;

        assert!(result.posts().is_empty());
        assert_eq!(result.sources()[0].status, SourceStatus::Unavailable);
        assert_eq!(
            result.warnings(),
            ["Instagram unavailable: login required".to_string()]
        );
    }
}

use pretty_assertions::assert_eq;

use super::*;

fn meta(cpu: i64, mem: i64) -> ClusterMeta {
	ClusterMeta {
		app_version: "v0.3.1".into(),
		context: "kind-dev".into(),
		cluster: "kind".into(),
		server_version: "v1.31.0".into(),
		cpu,
		mem,
	}
}

#[test]
fn flash_formats_level_color() {
	let indicator = StatusIndicator::new(IndicatorStyles::default());
	indicator.info("saved");
	assert_eq!(indicator.text(), "[lawngreen::b] <saved> ");
	indicator.warn("slow");
	assert_eq!(indicator.text(), "[mediumvioletred::b] <slow> ");
	indicator.err("boom");
	assert_eq!(indicator.text(), "[orangered::b] <boom> ");
}

#[test]
fn flash_without_runtime_waits_for_manual_reset() {
	let indicator = StatusIndicator::new(IndicatorStyles::default());
	indicator.set_permanent("headline");
	indicator.err("boom");
	assert_eq!(indicator.text(), "[orangered::b] <boom> ");

	indicator.reset();
	assert_eq!(indicator.text(), "headline");
}

#[tokio::test(start_paused = true)]
async fn flash_resets_after_delay() {
	let indicator = StatusIndicator::new(IndicatorStyles::default());
	indicator.set_permanent("headline");
	indicator.info("saved");

	tokio::time::sleep(RESET_DELAY - Duration::from_millis(10)).await;
	assert_eq!(indicator.text(), "[lawngreen::b] <saved> ");

	tokio::time::sleep(Duration::from_millis(20)).await;
	assert_eq!(indicator.text(), "headline");
}

#[tokio::test(start_paused = true)]
async fn newer_flash_cancels_pending_reset() {
	let indicator = StatusIndicator::new(IndicatorStyles::default());
	indicator.set_permanent("headline");
	indicator.info("first");

	tokio::time::sleep(Duration::from_secs(3)).await;
	indicator.warn("second");

	tokio::time::sleep(Duration::from_secs(3)).await;
	assert_eq!(indicator.text(), "[mediumvioletred::b] <second> ");

	tokio::time::sleep(Duration::from_secs(3)).await;
	assert_eq!(indicator.text(), "headline");
}

#[tokio::test(start_paused = true)]
async fn manual_reset_cancels_timer() {
	let indicator = StatusIndicator::with_delay(IndicatorStyles::default(), Duration::from_secs(1));
	indicator.set_permanent("old");
	indicator.info("msg");
	indicator.reset();
	assert_eq!(indicator.text(), "old");

	indicator.set_permanent("new");
	tokio::time::sleep(Duration::from_secs(2)).await;
	assert_eq!(indicator.text(), "new");
}

#[test]
fn cluster_info_updated_sets_headline() {
	let indicator = StatusIndicator::new(IndicatorStyles::default());
	indicator.cluster_info_updated(&meta(12, 40));
	assert_eq!(
		indicator.text(),
		"[orange::b]Tabula [aqua::]v0.3.1 [white::]kind-dev:kind:v1.31.0 [lawngreen::]12%[cadetblue::]::[lawngreen::]40%"
	);
	assert_eq!(indicator.permanent(), indicator.text());
}

#[test]
fn cluster_info_changed_shows_trends() {
	let indicator = StatusIndicator::new(IndicatorStyles::default());
	indicator.cluster_info_changed(&meta(10, 50), &meta(20, 30));
	let text = indicator.text();
	assert!(text.contains("20%[red::b]↑"), "{text}");
	assert!(text.contains("30%[green::b]↓"), "{text}");
}

#[test]
fn styles_changed_applies_to_next_headline() {
	let indicator = StatusIndicator::new(IndicatorStyles::default());
	let styles = IndicatorStyles {
		logo: "hotpink".into(),
		..Default::default()
	};
	indicator.styles_changed(&styles);
	assert_eq!(indicator.styles(), styles);

	indicator.cluster_info_updated(&meta(1, 1));
	assert!(indicator.text().starts_with("[hotpink::b]Tabula"));
}

#[test]
fn perc_helpers() {
	assert_eq!(print_perc(42), "42%");
	assert_eq!(as_perc_delta(10, 10), "10%");
	assert_eq!(as_perc_delta(10, 11), "11%[red::b]↑");
	assert_eq!(as_perc_delta(11, 10), "10%[green::b]↓");
}

#[test]
fn clones_share_state() {
	let indicator = StatusIndicator::new(IndicatorStyles::default());
	let view = indicator.clone();
	indicator.set_permanent("shared");
	assert_eq!(view.text(), "shared");
}

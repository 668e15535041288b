use super::*;

fn channel(username: &str, is_live: bool) -> ChannelSummary {
    ChannelSummary {
        username: username.to_owned(),
        nickname: None,
        is_live,
        thumbnail: None,
    }
}

#[test]
fn live_channels_sort_before_offline_ones() {
    let mut list = vec![
        channel("offline-a", false),
        channel("live-a", true),
        channel("offline-b", false),
        channel("live-b", true),
    ];
    sort_live_first(&mut list);
    let names: Vec<&str> = list.iter().map(|c| c.username.as_str()).collect();
    assert_eq!(names, vec!["live-a", "live-b", "offline-a", "offline-b"]);
}

#[test]
fn sort_is_stable_within_each_group() {
    let mut list = vec![channel("a", false), channel("b", false), channel("c", false)];
    sort_live_first(&mut list);
    let names: Vec<&str> = list.iter().map(|c| c.username.as_str()).collect();
    assert_eq!(names, vec!["a", "b", "c"]);
}

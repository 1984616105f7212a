//! Trimmed-down profile pages used across the extractor tests.

pub(crate) const PROFILE_OFFLINE: &str = r#"<!DOCTYPE html>
<html>
<head><title>Steam Community :: Azgın Sinek</title></head>
<body class="flat_page profile_page">
<div class="profile_header_bg">
  <div class="profile_header">
    <div class="playerAvatar profile_header_size offline" data-miniprofile="98765432">
      <div class="playerAvatarAutoSizeInner">
        <div class="profile_avatar_frame">
          <picture>
            <img src="https://cdn.akamai.steamstatic.com/steamcommunity/public/images/items/1263950/frame.png">
          </picture>
        </div>
        <picture>
          <source srcset="https://avatars.akamai.steamstatic.com/a691782e9df50a0a5052ba0edb8df5b1789906a0_full.jpg">
          <img src="https://avatars.akamai.steamstatic.com/a691782e9df50a0a5052ba0edb8df5b1789906a0_full.jpg">
        </picture>
      </div>
    </div>
    <div class="profile_header_centered_persona">
      <div class="persona_name" style="font-size: 24px;">
        <span class="actual_persona_name">Azgın Sinek</span>
      </div>
      <div class="header_real_name ellipsis">
        <bdi>A</bdi>
        &nbsp;
        <img class="profile_flag" src="https://community.akamai.steamstatic.com/public/images/countryflags/tr.gif">
        Istanbul, Istanbul, Turkey
      </div>
    </div>
    <div class="profile_header_summary">
      <div class="profile_summary">
        Mary on a cross
      </div>
    </div>
  </div>
</div>
<div class="profile_content">
  <div class="profile_rightcol">
    <div class="responsive_status_info">
      <div class="profile_in_game persona offline">
        <div class="profile_in_game_header">Currently Offline</div>
      </div>
    </div>
    <div class="profile_header_badgeinfo">
      <div class="persona_name persona_level">Level <div class="friendPlayerLevel lvl_20"><span class="friendPlayerLevelNum">24</span></div></div>
      <div class="favorite_badge">
        <div class="favorite_badge_icon">
          <a href="https://steamcommunity.com/id/azgin/gamecards/362680/">
            <img src="https://cdn.akamai.steamstatic.com/steamcommunity/public/images/items/362680/03449c0e.png" class="badge_icon small">
          </a>
        </div>
        <div class="favorite_badge_description">
          <div class="name ellipsis"><a class="whiteLink" href="https://steamcommunity.com/id/azgin/gamecards/362680/">Fransformation.</a></div>
          <div class="xp">100 XP</div>
        </div>
      </div>
    </div>
    <div class="profile_badges">
      <div class="profile_count_link_preview">
        <div class="profile_badges_badge" data-tooltip-html="Game Collector">
          <a href="https://steamcommunity.com/id/azgin/badges/13">
            <img src="https://community.akamai.steamstatic.com/public/images/badges/13_gamecollector/50_54.png?v=4" class="badge_icon small">
          </a>
        </div>
        <div class="profile_badges_badge last" data-tooltip-html="Steam Replay 2023">
          <a href="https://steamcommunity.com/id/azgin/badges/1">
            <img src="//community.akamai.steamstatic.com/public/images/badges/generic/YIR2023_54.png" class="badge_icon small">
          </a>
        </div>
      </div>
    </div>
  </div>
  <div class="profile_leftcol">
    <div class="profile_customization_area">
      <div class="profile_customization">
        <div class="profile_customization_header">Favorite Game</div>
        <div class="profile_customization_block">
          <div class="favoritegame_showcase">
            <div class="showcase_content_bg showcase_stats_row_wrapper">
              <div class="favoritegame_showcase_game">
                <div class="favorite_game_cap">
                  <a href="https://steamcommunity.com/app/362680">
                    <img class="game_capsule" src="https://cdn.akamai.steamstatic.com/steam/apps/362680/capsule_184x69.jpg">
                  </a>
                </div>
                <div class="showcase_item_detail_title">
                  <a class="whiteLink" href="https://steamcommunity.com/app/362680">Fran Bow</a>
                </div>
                <div class="showcase_stats_row">
                  <div class="showcase_stat">
                    <div class="value">12.9</div>
                    <div class="label">Hours played</div>
                  </div>
                </div>
              </div>
              <div class="game_info_stats">
                <div class="game_info_achievements_badge">
                  <div class="game_info_achievements">
                    <div class="game_info_achievements_summary_area">
                      <span class="game_info_achievement_summary">
                        <a class="whiteLink" href="https://steamcommunity.com/id/azgin/stats/362680/achievements/">Achievement Progress</a>
                        &nbsp; <span class="ellipsis">18 of 18</span>
                      </span>
                    </div>
                  </div>
                </div>
                <div class="game_info_badge_border">
                  <div class="game_info_badge">
                    <div class="game_info_badge_icon">
                      <a href="https://steamcommunity.com/id/azgin/gamecards/362680/">
                        <img src="https://cdn.akamai.steamstatic.com/steamcommunity/public/images/items/362680/03449c0e.png" class="badge_icon small">
                      </a>
                    </div>
                    <div class="game_info_badge_description">
                      <div class="name"><a class="whiteLink" href="https://steamcommunity.com/id/azgin/gamecards/362680/">Fransformation.</a></div>
                      <div class="xp">100 XP</div>
                    </div>
                  </div>
                </div>
              </div>
            </div>
          </div>
        </div>
      </div>
    </div>
    <div class="profile_recentgame_header profile_leftcol_header">
      <h2>Recent Activity</h2>
    </div>
    <div class="recent_games">
      <div class="recent_game">
        <div class="recent_game_content">
          <div class="game_info">
            <div class="game_info_cap">
              <a href="https://steamcommunity.com/app/730"><img class="game_capsule" src="https://cdn.akamai.steamstatic.com/steam/apps/730/capsule_184x69.jpg"></a>
            </div>
            <div class="game_info_details">
              1,168 hrs on record<br>
              last played on 4 Jan
            </div>
            <div class="game_name"><a class="whiteLink" href="https://steamcommunity.com/app/730">Counter-Strike 2</a></div>
          </div>
          <div class="game_info_stats">
            <div class="game_info_achievements_only_ctn">
              <div class="game_info_achievements">
                <div class="game_info_achievements_summary_area">
                  <span class="game_info_achievement_summary">
                    <a class="whiteLink" href="https://steamcommunity.com/id/azgin/stats/730/achievements/">Achievement Progress</a>
                    &nbsp; <span class="ellipsis">1 of 1</span>
                  </span>
                </div>
              </div>
            </div>
          </div>
        </div>
      </div>
      <div class="recent_game">
        <div class="recent_game_content">
          <div class="game_info">
            <div class="game_info_cap">
              <a href="https://steamcommunity.com/app/221640"><img class="game_capsule" src="//cdn.akamai.steamstatic.com/steam/apps/221640/capsule_184x69.jpg"></a>
            </div>
            <div class="game_info_details">
              3.1 hrs on record<br>
              last played on 2 Jan
            </div>
            <div class="game_name"><a class="whiteLink" href="https://steamcommunity.com/app/221640">Super Hexagon</a></div>
          </div>
          <div class="game_info_stats">
            <div class="game_info_achievements_badge">
              <div class="game_info_achievements">
                <div class="game_info_achievements_summary_area">
                  <span class="game_info_achievement_summary">
                    <a class="whiteLink" href="https://steamcommunity.com/id/azgin/stats/221640/achievements/">Achievement Progress</a>
                    &nbsp; <span class="ellipsis">4 of 6</span>
                  </span>
                </div>
              </div>
            </div>
            <div class="game_info_badge_border">
              <div class="game_info_badge">
                <div class="game_info_badge_icon">
                  <a href="https://steamcommunity.com/id/azgin/gamecards/221640/">
                    <img src="https://cdn.akamai.steamstatic.com/steamcommunity/public/images/items/221640/58d721e7.png" class="badge_icon small">
                  </a>
                </div>
                <div class="game_info_badge_description">
                  <div class="name">Hexagon</div>
                  <div class="xp">100 XP</div>
                </div>
              </div>
            </div>
          </div>
        </div>
      </div>
      <div class="recent_game">
        <div class="recent_game_content">
          <div class="game_info">
            <div class="game_info_cap">
              <a href="https://steamcommunity.com/app/550"><img class="game_capsule" src="https://cdn.akamai.steamstatic.com/steam/apps/550/capsule_184x69.jpg"></a>
            </div>
            <div class="game_info_details">
              40 hrs on record<br>
              last played on 25 Dec, 2023
            </div>
            <div class="game_name"><a class="whiteLink" href="https://steamcommunity.com/app/550">Left 4 Dead 2</a></div>
          </div>
        </div>
      </div>
    </div>
  </div>
</div>
</body>
</html>"#;

pub(crate) const PROFILE_IN_GAME: &str = r#"<!DOCTYPE html>
<html>
<body class="flat_page profile_page">
<div class="profile_header">
  <div class="playerAvatar profile_header_size in-game" data-miniprofile="11223344">
    <div class="playerAvatarAutoSizeInner">
      <img src="https://avatars.akamai.steamstatic.com/player_full.jpg">
    </div>
  </div>
  <span class="actual_persona_name">player</span>
</div>
<div class="responsive_status_info">
  <div class="profile_in_game persona in-game">
    <div class="profile_in_game_header">Currently In-Game</div>
    <div class="profile_in_game_name">Counter-Strike 2</div>
  </div>
</div>
<div class="recent_games">
  <div class="recent_game">
    <div class="recent_game_content">
      <div class="game_info">
        <div class="game_info_cap">
          <a href="https://steamcommunity.com/app/730"><img class="game_capsule" src="https://cdn.akamai.steamstatic.com/steam/apps/730/capsule_184x69.jpg"></a>
        </div>
        <div class="game_info_details">
          1,168 hrs on record<br>
          Currently In-Game
        </div>
        <div class="game_name"><a class="whiteLink" href="https://steamcommunity.com/app/730">Counter-Strike 2</a></div>
      </div>
      <div class="game_info_stats">
        <div class="game_info_achievements_only_ctn">
          <div class="game_info_achievements">
            <div class="game_info_achievements_summary_area">
              <span class="game_info_achievement_summary">
                <a class="whiteLink" href="https://steamcommunity.com/id/player/stats/730/achievements/">Achievement Progress</a>
                &nbsp; <span class="ellipsis">1 of 1</span>
              </span>
            </div>
          </div>
        </div>
      </div>
    </div>
  </div>
  <div class="recent_game">
    <div class="recent_game_content">
      <div class="game_info">
        <div class="game_info_details">
          40 hrs on record<br>
          last played on 25 Dec, 2023
        </div>
        <div class="game_name"><a class="whiteLink" href="https://steamcommunity.com/app/550">Left 4 Dead 2</a></div>
      </div>
    </div>
  </div>
</div>
</body>
</html>"#;

pub(crate) const PROFILE_IN_GAME_NO_RECENT: &str = r#"<!DOCTYPE html>
<html>
<body class="flat_page profile_page">
<div class="responsive_status_info">
  <div class="profile_in_game persona in-game">
    <div class="profile_in_game_header">Currently In-Game</div>
    <div class="profile_in_game_name">Super Hexagon</div>
  </div>
</div>
</body>
</html>"#;

pub(crate) const PROFILE_ONLINE_MINIMAL: &str = r#"<!DOCTYPE html>
<html>
<body class="flat_page profile_page">
<div class="profile_header">
  <div class="playerAvatar profile_header_size online">
    <div class="playerAvatarAutoSizeInner">
      <img src="https://avatars.akamai.steamstatic.com/quiet_full.jpg">
    </div>
  </div>
  <div class="persona_name"><span class="actual_persona_name">quiet</span></div>
</div>
<div class="responsive_status_info">
  <div class="profile_in_game persona online">
    <div class="profile_in_game_header">Currently Online</div>
  </div>
</div>
<div class="persona_name persona_level">Level <div class="friendPlayerLevel lvl_0"><span class="friendPlayerLevelNum">3</span></div></div>
<div class="profile_summary"></div>
</body>
</html>"#;

pub(crate) const PROFILE_PRIVATE: &str = r#"<!DOCTYPE html>
<html>
<body class="flat_page profile_page private_profile">
<div class="profile_header">
  <div class="playerAvatar profile_header_size offline" data-miniprofile="55555555">
    <div class="playerAvatarAutoSizeInner">
      <img src="https://avatars.akamai.steamstatic.com/hidden_full.jpg">
    </div>
  </div>
  <span class="actual_persona_name">hidden</span>
</div>
<div class="responsive_status_info">
  <div class="profile_in_game persona offline">
    <div class="profile_in_game_header">Currently Offline</div>
  </div>
</div>
<div class="profile_private_info">
  This profile is private.
</div>
</body>
</html>"#;

pub(crate) const MINI_PROFILE: &str = r#"<div class="miniprofile_container">
  <div class="miniprofile_nameplatecontainer">
    <video class="miniprofile_nameplate" playsinline autoplay muted loop>
      <source src="https://cdn.akamai.steamstatic.com/steamcommunity/public/images/items/1492660/nameplate.webm" type="video/webm">
      <source src="//cdn.akamai.steamstatic.com/steamcommunity/public/images/items/1492660/nameplate.mp4" type="video/mp4">
      <source src="https://cdn.akamai.steamstatic.com/steamcommunity/public/images/items/1492660/nameplate.ogv">
    </video>
  </div>
  <div class="miniprofile_playersection">
    <div class="persona offline">Azgın Sinek</div>
  </div>
</div>"#;

pub(crate) const MINI_PROFILE_PLAIN: &str = r#"<div class="miniprofile_container">
  <div class="miniprofile_playersection">
    <div class="persona online">quiet</div>
  </div>
</div>"#;

//! # ASCII Art
//!
//! Portraits and banners drawn by the terminal engine.

/// Portrait of a minion.
pub const MINION: &str = r"
   .----.
  / (o)  \
 |  ____  |
 | |____| |
  \______/
   |    |
  _|    |_";

/// Portrait of a product manager.
pub const MANAGER: &str = r"
 O
/|\
/ \";

/// Drawn in place of a player who is no longer in the game.
pub const GRAVESTONE: &str = r"
   _____
  /     \
 |  RIP  |
 |       |
 |_______|";

/// Welcome screen banner.
pub const BANNER: &str = r"
  ____  _       _    __                              ___
 |  _ \| | __ _| |_ / _| ___  _ __ _ __ ___  ___    ( _ )
 | |_) | |/ _` | __| |_ / _ \| '__| '_ ` _ \/ __|   / _ \/\
 |  __/| | (_| | |_|  _| (_) | |  | | | | | \__ \  | (_>  <
 |_|   |_|\__,_|\__|_|  \___/|_|  |_| |_| |_|___/   \___/\/

              P R O G R A M M E R S";

/// Shown when the whole band is out.
pub const GAME_OVER: &str = r"
   ____                         ___
  / ___| __ _ _ __ ___   ___   / _ \__   _____ _ __
 | |  _ / _` | '_ ` _ \ / _ \ | | | \ \ / / _ \ '__|
 | |_| | (_| | | | | | |  __/ | |_| |\ V /  __/ |
  \____|\__,_|_| |_| |_|\___|  \___/  \_/ \___|_|

        PRODUCTION wins this time.";

/// Shown when the band survives.
pub const GAME_WON: &str = r"
 __   __            __        __          _
 \ \ / /__  _   _   \ \      / /__  _ __ | |
  \ V / _ \| | | |   \ \ /\ / / _ \| '_ \| |
   | | (_) | |_| |    \ V  V / (_) | | | |_|
   |_|\___/ \__,_|     \_/\_/ \___/|_| |_(_)

      PRODUCTION survived another release.";

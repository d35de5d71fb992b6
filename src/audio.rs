/// Sound playback.
///
/// The simulation only queues `Sound` cues; a `SoundPlayer` turns them
/// into noise.  Real playback needs the `audio` feature, otherwise cues
/// are just logged.

use log::debug;

use crate::entities::Sound;

pub trait SoundPlayer {
    /// Start `sound` from the beginning.  Failures are swallowed.
    fn play(&mut self, sound: Sound);
}

/// Plays nothing.  Used when muted or built without audio support.
#[derive(Debug, Default)]
pub struct SilentPlayer;

impl SoundPlayer for SilentPlayer {
    fn play(&mut self, sound: Sound) {
        debug!("sound cue {:?}", sound);
    }
}

#[cfg(feature = "audio")]
pub use self::rodio_player::RodioPlayer;

#[cfg(feature = "audio")]
mod rodio_player {
    use std::collections::HashMap;
    use std::io::Cursor;
    use std::path::Path;
    use std::sync::Arc;

    use log::{debug, warn};
    use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};

    use super::SoundPlayer;
    use crate::entities::Sound;

    /// Preloads every clip into memory and decodes a fresh copy per play,
    /// so a replay always restarts the clip.
    pub struct RodioPlayer {
        _stream: OutputStream,
        handle: OutputStreamHandle,
        clips: HashMap<Sound, Arc<[u8]>>,
        volume: f32,
    }

    impl RodioPlayer {
        /// Open the default output device.  Clips that fail to load are
        /// logged and then stay silent.
        pub fn new(dir: &Path, volume: f32) -> Result<Self, rodio::StreamError> {
            let (stream, handle) = OutputStream::try_default()?;
            let mut clips = HashMap::new();
            for sound in Sound::ALL {
                let path = dir.join(sound.file_name());
                match std::fs::read(&path) {
                    Ok(bytes) => {
                        clips.insert(sound, Arc::from(bytes));
                    }
                    Err(e) => warn!("could not load {}: {}", path.display(), e),
                }
            }
            Ok(RodioPlayer {
                _stream: stream,
                handle,
                clips,
                volume,
            })
        }
    }

    impl SoundPlayer for RodioPlayer {
        fn play(&mut self, sound: Sound) {
            let Some(bytes) = self.clips.get(&sound) else {
                return;
            };
            let source = match Decoder::new(Cursor::new(Arc::clone(bytes))) {
                Ok(source) => source,
                Err(e) => {
                    warn!("could not decode {:?}: {}", sound, e);
                    return;
                }
            };
            match Sink::try_new(&self.handle) {
                Ok(sink) => {
                    sink.set_volume(self.volume);
                    sink.append(source);
                    sink.detach();
                }
                Err(e) => debug!("playback of {:?} failed: {}", sound, e),
            }
        }
    }
}

/// Drives pending device work (callbacks, resource cleanup) without blocking.
///
/// Call once per frame after presenting.
pub fn tick_device(device: &wgpu::Device) {
    if let Err(err) = device.poll(wgpu::PollType::Poll) {
        log::warn!("device poll failed: {err}");
    }
}

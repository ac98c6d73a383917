#![allow(dead_code)]

use std::{
    cell::RefCell,
    collections::{HashMap, HashSet, VecDeque},
    rc::Rc,
    sync::{Arc, Mutex},
};

use est_platform::{
    device::{
        ClearCommand, DrawCommand, HeadlessDevice, IndexFormat, MeshId, RenderDevice, Renderer,
        ShaderData, ShaderId, TargetId, TextureFormat, TextureId, TextureSampler, UniformInfo,
        VertexFormat,
    },
    host::{
        DeviceIndex, GamepadInfo, Host, HostError, HostEvent, HostWindow, InstanceId,
        JoystickInfo, WindowDesc,
    },
    math::Point2,
    platform::{Platform, PlatformDesc},
    utils::LogBridge,
};

/// Everything the platform asked the host to do.
#[derive(Debug, Default)]
pub struct HostCalls {
    pub init: usize,
    pub bridge_installs: usize,
    pub windows_created: Vec<WindowDesc>,
    pub windows_destroyed: Vec<HostWindow>,
    pub windows_shown: usize,
    pub titles: Vec<String>,
    pub sizes: Vec<(i32, i32)>,
    pub fullscreen: Vec<bool>,
    pub resizable: Vec<bool>,
    pub swap_intervals: Vec<i32>,
    pub pumps: usize,
    pub opened_joysticks: Vec<DeviceIndex>,
    pub closed_joysticks: Vec<InstanceId>,
    pub opened_gamepads: Vec<DeviceIndex>,
    pub closed_gamepads: Vec<InstanceId>,
}

/// Scripted host: events pushed with [MockHost::push] become visible on the
/// next pump.
pub struct MockHost {
    pub calls: HostCalls,
    pub fail_init: bool,
    pub fail_window: bool,
    pub fail_bridge: bool,
    pub display_hints: bool,
    scripted: VecDeque<HostEvent>,
    queue: VecDeque<HostEvent>,
    gamepad_devices: HashSet<DeviceIndex>,
    joysticks: HashMap<DeviceIndex, JoystickInfo>,
    gamepads: HashMap<DeviceIndex, GamepadInfo>,
    window_size: Point2,
    next_window: u64,
    clipboard: Option<String>,
    pref_root: String,
}

impl MockHost {
    pub fn new() -> Self {
        Self {
            calls: HostCalls::default(),
            fail_init: false,
            fail_window: false,
            fail_bridge: false,
            display_hints: true,
            scripted: VecDeque::new(),
            queue: VecDeque::new(),
            gamepad_devices: HashSet::new(),
            joysticks: HashMap::new(),
            gamepads: HashMap::new(),
            window_size: Point2::ZERO,
            next_window: 1,
            clipboard: None,
            pref_root: "/home/test/.local/share/".to_string(),
        }
    }

    pub fn push(&mut self, event: HostEvent) {
        self.scripted.push_back(event);
    }

    /// Plugs a raw joystick at `device`.
    pub fn add_joystick(&mut self, device: DeviceIndex, instance: InstanceId, name: &str) {
        self.joysticks.insert(
            device,
            JoystickInfo {
                instance,
                name: name.to_string(),
                button_count: 12,
                axis_count: 4,
                vendor: 0x046d,
                product: 0xc216,
                version: 0x0110,
            },
        );
    }

    /// Plugs a mapped gamepad at `device`. Like real hosts, it is also
    /// visible as a joystick.
    pub fn add_gamepad(&mut self, device: DeviceIndex, instance: InstanceId, name: &str) {
        self.add_joystick(device, instance, name);
        self.gamepad_devices.insert(device);
        self.gamepads.insert(
            device,
            GamepadInfo {
                instance,
                name: name.to_string(),
                vendor: 0x045e,
                product: 0x028e,
                version: 0x0114,
            },
        );
    }
}

impl Host for MockHost {
    fn version(&self) -> String {
        "mock 1.0".to_string()
    }

    fn install_log_bridge(&mut self, _bridge: LogBridge) -> Result<(), HostError> {
        self.calls.bridge_installs += 1;
        match self.fail_bridge {
            true => Err(HostError::LogBridge("logger already set".to_string())),
            false => Ok(()),
        }
    }

    fn apply_display_hints(&mut self) -> bool {
        self.display_hints
    }

    fn init(&mut self) -> Result<(), HostError> {
        self.calls.init += 1;
        match self.fail_init {
            true => Err(HostError::Init("no video device".to_string())),
            false => Ok(()),
        }
    }

    fn create_window(&mut self, desc: &WindowDesc) -> Result<HostWindow, HostError> {
        if self.fail_window {
            return Err(HostError::WindowCreation("no display".to_string()));
        }

        self.calls.windows_created.push(desc.clone());
        self.window_size = Point2::new(desc.width, desc.height);

        let window = HostWindow(self.next_window);
        self.next_window += 1;
        Ok(window)
    }

    fn destroy_window(&mut self, window: HostWindow) {
        self.calls.windows_destroyed.push(window);
    }

    fn show_window(&mut self, _window: HostWindow) {
        self.calls.windows_shown += 1;
    }

    fn set_window_title(&mut self, _window: HostWindow, title: &str) {
        self.calls.titles.push(title.to_string());
    }

    fn set_window_size(&mut self, _window: HostWindow, width: i32, height: i32) {
        self.calls.sizes.push((width, height));
        self.window_size = Point2::new(width, height);
    }

    fn window_size(&self, _window: HostWindow) -> Point2 {
        self.window_size
    }

    fn window_size_in_pixels(&self, _window: HostWindow) -> Point2 {
        Point2::new(self.window_size.x * 2, self.window_size.y * 2)
    }

    fn set_fullscreen(&mut self, _window: HostWindow, fullscreen: bool) {
        self.calls.fullscreen.push(fullscreen);
    }

    fn set_resizable(&mut self, _window: HostWindow, resizable: bool) {
        self.calls.resizable.push(resizable);
    }

    fn set_swap_interval(&mut self, interval: i32) {
        self.calls.swap_intervals.push(interval);
    }

    fn pump_events(&mut self) {
        self.calls.pumps += 1;
        self.queue.extend(self.scripted.drain(..));
    }

    fn poll_event(&mut self) -> Option<HostEvent> {
        self.queue.pop_front()
    }

    fn is_gamepad(&self, device: DeviceIndex) -> bool {
        self.gamepad_devices.contains(&device)
    }

    fn open_joystick(&mut self, device: DeviceIndex) -> Option<JoystickInfo> {
        self.calls.opened_joysticks.push(device);
        self.joysticks.get(&device).cloned()
    }

    fn close_joystick(&mut self, instance: InstanceId) {
        self.calls.closed_joysticks.push(instance);
    }

    fn open_gamepad(&mut self, device: DeviceIndex) -> Option<GamepadInfo> {
        self.calls.opened_gamepads.push(device);
        self.gamepads.get(&device).cloned()
    }

    fn close_gamepad(&mut self, instance: InstanceId) {
        self.calls.closed_gamepads.push(instance);
    }

    fn pref_path(&self, application: &str) -> Option<String> {
        Some(format!("{}{}/", self.pref_root, application))
    }

    fn set_clipboard(&mut self, text: &str) {
        self.clipboard = Some(text.to_string());
    }

    fn clipboard(&mut self) -> Option<String> {
        self.clipboard.clone()
    }
}

/// Hook and resource calls seen by a [RecordingDevice].
#[derive(Debug, Default)]
pub struct DeviceLog {
    pub created: usize,
    pub prepare: usize,
    pub initialize: usize,
    pub shutdown: usize,
    pub frame_begin: usize,
    pub frame_end: usize,
    pub calls: Vec<&'static str>,
}

pub type SharedDeviceLog = Rc<RefCell<DeviceLog>>;

/// Records every call, and forwards resource calls to a [HeadlessDevice].
pub struct RecordingDevice {
    log: SharedDeviceLog,
    inner: HeadlessDevice,
    swap_interval: bool,
    fail_initialize: bool,
}

impl RecordingDevice {
    fn record(&mut self, call: &'static str) {
        self.log.borrow_mut().calls.push(call);
    }
}

impl RenderDevice for RecordingDevice {
    fn renderer(&self) -> Renderer {
        self.inner.renderer()
    }

    fn uses_swap_interval(&self) -> bool {
        self.swap_interval
    }

    fn prepare(&mut self) {
        self.log.borrow_mut().prepare += 1;
    }

    fn initialize(&mut self) -> bool {
        self.log.borrow_mut().initialize += 1;
        !self.fail_initialize
    }

    fn shutdown(&mut self) {
        self.log.borrow_mut().shutdown += 1;
    }

    fn frame_begin(&mut self) {
        self.log.borrow_mut().frame_begin += 1;
    }

    fn frame_end(&mut self) {
        self.log.borrow_mut().frame_end += 1;
    }

    fn texture_create(&mut self, width: i32, height: i32, format: TextureFormat) -> Option<TextureId> {
        self.record("texture_create");
        self.inner.texture_create(width, height, format)
    }

    fn texture_set_data(&mut self, texture: TextureId, data: &[u8]) {
        self.record("texture_set_data");
        self.inner.texture_set_data(texture, data);
    }

    fn texture_get_data(&mut self, texture: TextureId, data: &mut [u8]) {
        self.record("texture_get_data");
        self.inner.texture_get_data(texture, data);
    }

    fn texture_destroy(&mut self, texture: TextureId) {
        self.record("texture_destroy");
        self.inner.texture_destroy(texture);
    }

    fn target_create(&mut self, width: i32, height: i32, attachments: &[TextureFormat]) -> Option<TargetId> {
        self.record("target_create");
        self.inner.target_create(width, height, attachments)
    }

    fn target_get_attachment(&mut self, target: TargetId, index: usize) -> Option<TextureId> {
        self.record("target_get_attachment");
        self.inner.target_get_attachment(target, index)
    }

    fn target_destroy(&mut self, target: TargetId) {
        self.record("target_destroy");
        self.inner.target_destroy(target);
    }

    fn shader_create(&mut self, data: &ShaderData) -> Option<ShaderId> {
        self.record("shader_create");
        self.inner.shader_create(data)
    }

    fn shader_get_uniforms(&mut self, shader: ShaderId) -> Vec<UniformInfo> {
        self.record("shader_get_uniforms");
        self.inner.shader_get_uniforms(shader)
    }

    fn shader_set_uniform(&mut self, shader: ShaderId, index: usize, values: &[f32]) {
        self.record("shader_set_uniform");
        self.inner.shader_set_uniform(shader, index, values);
    }

    fn shader_set_texture(&mut self, shader: ShaderId, index: usize, textures: &[Option<TextureId>]) {
        self.record("shader_set_texture");
        self.inner.shader_set_texture(shader, index, textures);
    }

    fn shader_set_sampler(&mut self, shader: ShaderId, index: usize, samplers: &[TextureSampler]) {
        self.record("shader_set_sampler");
        self.inner.shader_set_sampler(shader, index, samplers);
    }

    fn shader_destroy(&mut self, shader: ShaderId) {
        self.record("shader_destroy");
        self.inner.shader_destroy(shader);
    }

    fn mesh_create(&mut self) -> Option<MeshId> {
        self.record("mesh_create");
        self.inner.mesh_create()
    }

    fn mesh_set_vertex_format(&mut self, mesh: MeshId, format: &VertexFormat) {
        self.record("mesh_set_vertex_format");
        self.inner.mesh_set_vertex_format(mesh, format);
    }

    fn mesh_set_vertex_data(&mut self, mesh: MeshId, data: &[u8]) {
        self.record("mesh_set_vertex_data");
        self.inner.mesh_set_vertex_data(mesh, data);
    }

    fn mesh_set_index_format(&mut self, mesh: MeshId, format: IndexFormat) {
        self.record("mesh_set_index_format");
        self.inner.mesh_set_index_format(mesh, format);
    }

    fn mesh_set_index_data(&mut self, mesh: MeshId, data: &[u8]) {
        self.record("mesh_set_index_data");
        self.inner.mesh_set_index_data(mesh, data);
    }

    fn mesh_destroy(&mut self, mesh: MeshId) {
        self.record("mesh_destroy");
        self.inner.mesh_destroy(mesh);
    }

    fn draw(&mut self, command: &DrawCommand) {
        self.record("draw");
        self.inner.draw(command);
    }

    fn clear(&mut self, command: &ClearCommand) {
        self.record("clear");
        self.inner.clear(command);
    }
}

/// Options of the [RecordingDevice] registered by [recording_desc].
#[derive(Clone, Copy, Default)]
pub struct DeviceOptions {
    pub swap_interval: bool,
    pub fail_initialize: bool,
}

/// Log lines captured per level.
#[derive(Clone, Default)]
pub struct Logs {
    pub info: Arc<Mutex<Vec<String>>>,
    pub warn: Arc<Mutex<Vec<String>>>,
    pub error: Arc<Mutex<Vec<String>>>,
}

impl Logs {
    pub fn errors(&self) -> Vec<String> {
        self.error.lock().unwrap().clone()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.warn.lock().unwrap().clone()
    }

    pub fn infos(&self) -> Vec<String> {
        self.info.lock().unwrap().clone()
    }
}

/// Attaches capturing sinks to `desc`.
pub fn with_logs(desc: PlatformDesc) -> (PlatformDesc, Logs) {
    let logs = Logs::default();

    let info = logs.info.clone();
    let warn = logs.warn.clone();
    let error = logs.error.clone();

    let desc = desc
        .on_log_info(move |msg| info.lock().unwrap().push(msg.to_string()))
        .on_log_warn(move |msg| warn.lock().unwrap().push(msg.to_string()))
        .on_log_error(move |msg| error.lock().unwrap().push(msg.to_string()));

    (desc, logs)
}

/// An 800x600 desc with an OpenGL [RecordingDevice] and capturing log sinks.
pub fn recording_desc(options: DeviceOptions) -> (PlatformDesc, Logs, SharedDeviceLog) {
    let device_log = SharedDeviceLog::default();
    let factory_log = device_log.clone();

    let desc = PlatformDesc::new()
        .with_size(800, 600)
        .with_title("test")
        .with_application_name("est-tests")
        .with_renderer(Renderer::OpenGL)
        .with_device(Renderer::OpenGL, move || {
            factory_log.borrow_mut().created += 1;
            Box::new(RecordingDevice {
                log: factory_log.clone(),
                inner: HeadlessDevice::with_renderer(Renderer::OpenGL),
                swap_interval: options.swap_interval,
                fail_initialize: options.fail_initialize,
            })
        });

    let (desc, logs) = with_logs(desc);
    (desc, logs, device_log)
}

/// A started platform over a [MockHost] with the default recording setup.
pub fn started() -> (Platform<MockHost>, Logs, SharedDeviceLog) {
    let (desc, logs, device_log) = recording_desc(DeviceOptions::default());
    let mut platform = Platform::new(MockHost::new(), desc);
    platform.startup().unwrap();
    (platform, logs, device_log)
}

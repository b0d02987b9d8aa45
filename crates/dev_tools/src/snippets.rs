//! Starter Luau snippets for common Roblox mechanics.

use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnippetPattern {
    TouchToCollect,
    ClickToBuy,
    Leaderboard,
    RoundSystem,
    Teleporter,
    DamageOnTouch,
    HealZone,
    SpeedBoost,
    InventorySystem,
    RemoteEvent,
}

impl SnippetPattern {
    pub const ALL: [SnippetPattern; 10] = [
        Self::TouchToCollect,
        Self::ClickToBuy,
        Self::Leaderboard,
        Self::RoundSystem,
        Self::Teleporter,
        Self::DamageOnTouch,
        Self::HealZone,
        Self::SpeedBoost,
        Self::InventorySystem,
        Self::RemoteEvent,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::TouchToCollect => "touch-to-collect",
            Self::ClickToBuy => "click-to-buy",
            Self::Leaderboard => "leaderboard",
            Self::RoundSystem => "round-system",
            Self::Teleporter => "teleporter",
            Self::DamageOnTouch => "damage-on-touch",
            Self::HealZone => "heal-zone",
            Self::SpeedBoost => "speed-boost",
            Self::InventorySystem => "inventory-system",
            Self::RemoteEvent => "remote-event",
        }
    }

    #[must_use]
    pub fn snippet(self) -> &'static Snippet {
        match self {
            Self::TouchToCollect => &TOUCH_TO_COLLECT,
            Self::ClickToBuy => &CLICK_TO_BUY,
            Self::Leaderboard => &LEADERBOARD,
            Self::RoundSystem => &ROUND_SYSTEM,
            Self::Teleporter => &TELEPORTER,
            Self::DamageOnTouch => &DAMAGE_ON_TOUCH,
            Self::HealZone => &HEAL_ZONE,
            Self::SpeedBoost => &SPEED_BOOST,
            Self::InventorySystem => &INVENTORY_SYSTEM,
            Self::RemoteEvent => &REMOTE_EVENT,
        }
    }

    /// Comma-separated list used in "not found" replies.
    #[must_use]
    pub fn available() -> String {
        Self::ALL
            .iter()
            .map(|pattern| pattern.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for SnippetPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SnippetPattern {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|pattern| pattern.as_str() == value)
            .ok_or_else(|| value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub name: &'static str,
    pub description: &'static str,
    pub placement: &'static str,
    pub code: &'static str,
    pub customization: &'static str,
}

impl Snippet {
    /// Markdown handed back to the agent.
    #[must_use]
    pub fn render(&self) -> String {
        format!(
            "# {name}\n\n**What it does:** {description}\n\n**Where to put it:** {placement}\n\n```lua\n{code}\n```\n\n## How to Customize\n{customization}",
            name = self.name,
            description = self.description,
            placement = self.placement,
            code = self.code.trim_end(),
            customization = self.customization,
        )
    }
}

const TOUCH_TO_COLLECT: Snippet = Snippet {
    name: "Touch to Collect",
    description: "Makes a part disappear when a player touches it and gives them points.",
    placement: "Put a Script inside the part players should collect.",
    code: r#"local coin = script.Parent
local POINTS = 10
local collected = false

coin.Touched:Connect(function(hit)
    local player = game.Players:GetPlayerFromCharacter(hit.Parent)
    if player and not collected then
        collected = true
        local stats = player:FindFirstChild("leaderstats")
        local points = stats and stats:FindFirstChild("Points")
        if points then
            points.Value = points.Value + POINTS
        end
        coin:Destroy()
    end
end)
"#,
    customization: "- Change `POINTS` to give more or less.\n- Swap `coin:Destroy()` for `coin.Transparency = 1` to hide it instead.",
};

const CLICK_TO_BUY: Snippet = Snippet {
    name: "Click to Buy",
    description: "Lets a player click a part to buy an item with their coins.",
    placement: "Put a ClickDetector and a Script inside the shop part.",
    code: r#"local shopPart = script.Parent
local clicker = shopPart:WaitForChild("ClickDetector")
local PRICE = 50

clicker.MouseClick:Connect(function(player)
    local coins = player.leaderstats and player.leaderstats:FindFirstChild("Coins")
    if coins and coins.Value >= PRICE then
        coins.Value = coins.Value - PRICE
        local sword = game.ServerStorage.Sword:Clone()
        sword.Parent = player.Backpack
    end
end)
"#,
    customization: "- Change `PRICE`.\n- Replace `Sword` with any tool kept in ServerStorage.",
};

const LEADERBOARD: Snippet = Snippet {
    name: "Leaderboard",
    description: "Shows each player's score in the top-right player list.",
    placement: "Put a Script in ServerScriptService.",
    code: r#"game.Players.PlayerAdded:Connect(function(player)
    local stats = Instance.new("Folder")
    stats.Name = "leaderstats"
    stats.Parent = player

    local points = Instance.new("IntValue")
    points.Name = "Points"
    points.Value = 0
    points.Parent = stats
end)
"#,
    customization: "- Rename `Points` to Coins, Wins or Kills.\n- Add more IntValues inside `leaderstats` to show more columns.",
};

const ROUND_SYSTEM: Snippet = Snippet {
    name: "Round System",
    description: "Runs an intermission, then a timed round, over and over.",
    placement: "Put a Script in ServerScriptService and a StringValue named Status in ReplicatedStorage.",
    code: r#"local status = game.ReplicatedStorage:WaitForChild("Status")
local INTERMISSION = 15
local ROUND_TIME = 60

local function countdown(label, seconds)
    for remaining = seconds, 1, -1 do
        status.Value = label .. ": " .. remaining
        task.wait(1)
    end
end

while true do
    countdown("Intermission", INTERMISSION)
    countdown("Round", ROUND_TIME)
end
"#,
    customization: "- Change `INTERMISSION` and `ROUND_TIME`.\n- Teleport players into the arena right before the round countdown.",
};

const TELEPORTER: Snippet = Snippet {
    name: "Teleporter",
    description: "Moves a player to another part when they step on a pad.",
    placement: "Put a Script inside the pad. Add a part named Destination to Workspace.",
    code: r#"local pad = script.Parent
local destination = workspace:WaitForChild("Destination")

pad.Touched:Connect(function(hit)
    local root = hit.Parent:FindFirstChild("HumanoidRootPart")
    if root then
        root.CFrame = destination.CFrame + Vector3.new(0, 3, 0)
    end
end)
"#,
    customization: "- Point `destination` at any part.\n- Raise the `3` if players get stuck in the floor.",
};

const DAMAGE_ON_TOUCH: Snippet = Snippet {
    name: "Damage on Touch",
    description: "Hurts players who touch the part, like lava.",
    placement: "Put a Script inside the dangerous part.",
    code: r#"local lava = script.Parent
local DAMAGE = 20
local cooling = {}

lava.Touched:Connect(function(hit)
    local humanoid = hit.Parent:FindFirstChild("Humanoid")
    if humanoid and not cooling[humanoid] then
        cooling[humanoid] = true
        humanoid:TakeDamage(DAMAGE)
        task.wait(1)
        cooling[humanoid] = nil
    end
end)
"#,
    customization: "- Set `DAMAGE` to 100 for instant knockout.\n- Change the `task.wait(1)` delay to hurt faster or slower.",
};

const HEAL_ZONE: Snippet = Snippet {
    name: "Heal Zone",
    description: "Slowly heals players standing in a zone.",
    placement: "Put a Script inside a transparent, CanCollide-off part.",
    code: r#"local zone = script.Parent
local HEAL = 5

zone.Touched:Connect(function(hit)
    local humanoid = hit.Parent:FindFirstChild("Humanoid")
    if humanoid then
        humanoid.Health = math.min(humanoid.Health + HEAL, humanoid.MaxHealth)
    end
end)
"#,
    customization: "- Change `HEAL`.\n- Give the zone a green color so players know it is safe.",
};

const SPEED_BOOST: Snippet = Snippet {
    name: "Speed Boost",
    description: "Makes a player run faster for a few seconds.",
    placement: "Put a Script inside the boost pad.",
    code: r#"local pad = script.Parent
local BOOST_SPEED = 40
local NORMAL_SPEED = 16
local DURATION = 5

pad.Touched:Connect(function(hit)
    local humanoid = hit.Parent:FindFirstChild("Humanoid")
    if humanoid and humanoid.WalkSpeed == NORMAL_SPEED then
        humanoid.WalkSpeed = BOOST_SPEED
        task.delay(DURATION, function()
            humanoid.WalkSpeed = NORMAL_SPEED
        end)
    end
end)
"#,
    customization: "- Change `BOOST_SPEED` and `DURATION`.\n- Use `JumpPower` instead of `WalkSpeed` for a jump pad.",
};

const INVENTORY_SYSTEM: Snippet = Snippet {
    name: "Inventory System",
    description: "Keeps a simple list of items each player has picked up.",
    placement: "Put a ModuleScript named Inventory in ServerScriptService.",
    code: r#"local Inventory = {}
local items = {}

function Inventory.add(player, itemName)
    items[player] = items[player] or {}
    table.insert(items[player], itemName)
end

function Inventory.has(player, itemName)
    return table.find(items[player] or {}, itemName) ~= nil
end

game.Players.PlayerRemoving:Connect(function(player)
    items[player] = nil
end)

return Inventory
"#,
    customization: "- Call `Inventory.add(player, \"Key\")` from a collect script.\n- Check `Inventory.has(player, \"Key\")` before opening a door.",
};

const REMOTE_EVENT: Snippet = Snippet {
    name: "Remote Event",
    description: "Lets a button on the player's screen ask the server to do something.",
    placement: "Add a RemoteEvent named ButtonPressed to ReplicatedStorage, then put this Script in ServerScriptService.",
    code: r#"local event = game.ReplicatedStorage:WaitForChild("ButtonPressed")

event.OnServerEvent:Connect(function(player, action)
    if action == "jump" then
        local humanoid = player.Character and player.Character:FindFirstChild("Humanoid")
        if humanoid then
            humanoid.Jump = true
        end
    end
end)

-- In a LocalScript inside the button:
-- script.Parent.MouseButton1Click:Connect(function()
--     game.ReplicatedStorage.ButtonPressed:FireServer("jump")
-- end)
"#,
    customization: "- Send other actions like \"shop\" or \"reset\".\n- Always check on the server that the player is allowed to do the action.",
};
